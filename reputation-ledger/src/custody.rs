multiversx_sc::imports!();

use crate::errors::{ERR_EMPTY_DEPOSIT, ERR_NO_FUNDS_ATTACHED, ERR_WRONG_DEPOSIT_TOKEN, ERR_ZERO_REWARD};

// Fundos em custódia e pagamentos do admin. Não há contabilidade própria:
// o saldo é o que o protocolo informa e um pagamento acima dele falha na
// própria transferência, revertendo a chamada inteira
#[multiversx_sc::module]
pub trait CustodyModule:
    crate::admin::AdminModule + crate::config::ConfigModule + crate::events::EventsModule
{
    // Deposita no fundo de recompensas; qualquer um pode, só com o token configurado
    #[payable("*")]
    #[endpoint(depositRewardTokens)]
    fn deposit_reward_tokens(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        let reward_token = EgldOrEsdtTokenIdentifier::esdt(self.reward_token_id().get());

        require!(
            payment.token_identifier == reward_token && payment.token_nonce == 0,
            ERR_WRONG_DEPOSIT_TOKEN
        );
        require!(payment.amount > 0u64, ERR_EMPTY_DEPOSIT);

        let caller = self.blockchain().get_caller();
        self.reward_tokens_deposited_event(&caller, &payment.amount);
    }

    // Paga uma recompensa em tokens a partir da custódia (somente admin)
    #[endpoint(rewardWithToken)]
    fn reward_with_token(&self, target: ManagedAddress, amount: BigUint) {
        self.require_admin();
        require!(amount > 0u64, ERR_ZERO_REWARD);

        let token_id = self.reward_token_id().get();
        self.send().direct_esdt(&target, &token_id, 0, &amount);

        self.reward_paid_event(&target, &amount);
    }

    // Repassa exatamente o EGLD enviado na chamada ao destinatário (somente admin)
    #[payable("EGLD")]
    #[endpoint(rewardWithNative)]
    fn reward_with_native(&self, target: ManagedAddress) {
        self.require_admin();

        let value = self.call_value().egld_value().clone_value();
        require!(value > 0u64, ERR_NO_FUNDS_ATTACHED);

        self.send().direct_egld(&target, &value);

        self.native_reward_paid_event(&target, &value);
    }

    // Saldos em custódia
    #[view(getTokenBalance)]
    fn get_token_balance(&self) -> BigUint {
        let token_id = self.reward_token_id().get();
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id), 0)
    }

    #[view(getNativeBalance)]
    fn get_native_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }
}
