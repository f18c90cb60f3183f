// ==========================================================================
// MÓDULO: reputation-ledger/src/reputation_ledger.rs
// Descrição: Contrato inteligente que mantém o histórico de feedbacks de cada
//            usuário, calcula a reputação ponderada e paga recompensas
//            (ESDT ou EGLD) a partir dos fundos do próprio contrato
// ==========================================================================

#![no_std]

multiversx_sc::imports!();

pub mod admin;
pub mod config;
pub mod custody;
pub mod errors;
pub mod events;

use errors::*;
use weighted_calculator::{
    is_valid_score, reward_multiplier, weighted_average, DecayPolicy, FeedbackEntry,
};

// Metadados usados no deploy: atualizável, mas nunca payable, para que
// transferências diretas ao contrato sejam recusadas pelo protocolo
pub const LEDGER_CODE_METADATA: CodeMetadata = CodeMetadata::UPGRADEABLE;

#[multiversx_sc::contract]
pub trait ReputationLedger:
    admin::AdminModule + config::ConfigModule + custody::CustodyModule + events::EventsModule
{
    // Inicializa o contrato: quem faz o deploy vira admin e a política de
    // decaimento usa os valores padrão quando omitida
    #[init]
    fn init(
        &self,
        reward_token_id: TokenIdentifier,
        decay_period_seconds: OptionalValue<u64>,
        max_weight: OptionalValue<u64>,
    ) {
        require!(
            reward_token_id.is_valid_esdt_identifier(),
            ERR_INVALID_REWARD_TOKEN
        );

        let defaults = DecayPolicy::default();
        let policy = DecayPolicy::new(
            decay_period_seconds
                .into_option()
                .unwrap_or(defaults.period_seconds),
            max_weight.into_option().unwrap_or(defaults.max_weight),
        );
        if let Err(err) = policy.validate() {
            sc_panic!(err.as_str());
        }

        let deployer = self.blockchain().get_caller();
        self.admin().set(&deployer);
        self.reward_token_id().set(&reward_token_id);
        self.decay_policy().set(policy);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // Registra um feedback; qualquer um pode avaliar qualquer um, inclusive a si mesmo
    #[endpoint(submitFeedback)]
    fn submit_feedback(&self, target: ManagedAddress, score: u8) {
        require!(is_valid_score(score), ERR_INVALID_SCORE);

        self.append_entry(&target, score);
        self.feedback_recorded_event(&target, score);
    }

    // Penalidade do admin: mesma entrada e mesmo peso de um feedback comum
    #[endpoint(applyPenalty)]
    fn apply_penalty(&self, target: ManagedAddress, magnitude: u8) {
        self.require_admin();
        require!(is_valid_score(magnitude), ERR_INVALID_SCORE);

        self.append_entry(&target, magnitude);
        self.penalty_applied_event(&target, magnitude);
    }

    // Recalcula a média ponderada a partir do histórico bruto (sem cache)
    #[view(getWeightedScore)]
    fn get_weighted_score(&self, target: ManagedAddress) -> u8 {
        let history = self.feedback_history(&target);
        require!(!history.is_empty(), ERR_NO_HISTORY);

        let now = self.blockchain().get_block_timestamp();
        let policy = self.decay_policy().get();

        match weighted_average(history.iter(), now, &policy) {
            Ok(score) => score,
            Err(err) => sc_panic!(err.as_str()),
        }
    }

    #[view(getFeedbackCount)]
    fn get_feedback_count(&self, target: ManagedAddress) -> u64 {
        self.feedback_history(&target).len() as u64
    }

    // Retorna uma entrada do histórico (índice a partir de 0, na ordem de envio)
    #[view(getFeedback)]
    fn get_feedback(&self, target: ManagedAddress, index: u64) -> FeedbackEntry {
        let history = self.feedback_history(&target);
        require!(
            index < history.len() as u64,
            ERR_FEEDBACK_INDEX_OUT_OF_RANGE
        );

        // VecMapper é indexado a partir de 1
        history.get(index as usize + 1)
    }

    // Utilitário para dimensionar recompensas fora da cadeia; os pagamentos não o usam
    #[view(calculateReward)]
    fn calculate_reward(&self, base_amount: u64, multiplier: u64) -> u64 {
        match reward_multiplier(base_amount, multiplier) {
            Ok(reward) => reward,
            Err(err) => sc_panic!(err.as_str()),
        }
    }

    fn append_entry(&self, target: &ManagedAddress, score: u8) {
        let timestamp = self.blockchain().get_block_timestamp();
        self.feedback_history(target)
            .push(&FeedbackEntry::new(score, timestamp));
    }

    // --- Storage mappers ---
    #[storage_mapper("feedback_history")]
    fn feedback_history(&self, target: &ManagedAddress) -> VecMapper<FeedbackEntry>;
}
