mod presence;

pub use presence::InMemoryPresenceRegistry;
