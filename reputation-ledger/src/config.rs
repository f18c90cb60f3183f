multiversx_sc::imports!();

use weighted_calculator::DecayPolicy;

// Configuração gravada no init e somente lida depois
#[multiversx_sc::module]
pub trait ConfigModule {
    #[view(getRewardTokenId)]
    #[storage_mapper("reward_token_id")]
    fn reward_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getDecayPolicy)]
    #[storage_mapper("decay_policy")]
    fn decay_policy(&self) -> SingleValueMapper<DecayPolicy>;
}
