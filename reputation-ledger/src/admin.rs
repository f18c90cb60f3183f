multiversx_sc::imports!();

use crate::errors::{ERR_UNAUTHORIZED, ERR_ZERO_ADMIN};

// Papel único de administrador: definido no init, só pode ser substituído
#[multiversx_sc::module]
pub trait AdminModule: crate::events::EventsModule {
    // Transfere a administração para outro endereço (somente admin)
    #[endpoint(transferAdmin)]
    fn transfer_admin(&self, new_admin: ManagedAddress) {
        self.require_admin();
        require!(!new_admin.is_zero(), ERR_ZERO_ADMIN);

        let previous_admin = self.admin().get();
        self.admin().set(&new_admin);

        self.admin_transferred_event(&previous_admin, &new_admin);
    }

    // Primeira verificação de todo endpoint restrito
    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_UNAUTHORIZED);
    }

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;
}
