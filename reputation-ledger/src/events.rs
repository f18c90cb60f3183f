multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    // Evento de feedback registrado
    #[event("feedback_recorded")]
    fn feedback_recorded_event(&self, #[indexed] target: &ManagedAddress, #[indexed] score: u8);

    // Evento de penalidade aplicada pelo admin
    #[event("penalty_applied")]
    fn penalty_applied_event(&self, #[indexed] target: &ManagedAddress, #[indexed] magnitude: u8);

    // Evento de recompensa em tokens, emitido só após a transferência
    #[event("reward_paid")]
    fn reward_paid_event(&self, #[indexed] target: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("native_reward_paid")]
    fn native_reward_paid_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("reward_tokens_deposited")]
    fn reward_tokens_deposited_event(
        &self,
        #[indexed] depositor: &ManagedAddress,
        #[indexed] amount: &BigUint,
    );

    #[event("admin_transferred")]
    fn admin_transferred_event(
        &self,
        #[indexed] previous_admin: &ManagedAddress,
        #[indexed] new_admin: &ManagedAddress,
    );
}
