//! Server state.

use std::sync::Arc;

use crate::{
    domain::{MessagePusher, PresenceRegistry},
    usecase::{
        BroadcastPresenceUseCase, ConnectPresenceUseCase, DisconnectPresenceUseCase,
        MovePresenceUseCase, OpenConnectionUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// OpenConnectionUseCase（コネクション開始のユースケース）
    pub open_connection_usecase: Arc<OpenConnectionUseCase>,
    /// ConnectPresenceUseCase（presence-connect のユースケース）
    pub connect_presence_usecase: Arc<ConnectPresenceUseCase>,
    /// MovePresenceUseCase（presence-move のユースケース）
    pub move_presence_usecase: Arc<MovePresenceUseCase>,
    /// DisconnectPresenceUseCase（切断のユースケース）
    pub disconnect_presence_usecase: Arc<DisconnectPresenceUseCase>,
    /// BroadcastPresenceUseCase（プレゼンス配信のユースケース）
    pub broadcast_presence_usecase: Arc<BroadcastPresenceUseCase>,
}

impl AppState {
    /// Wire every usecase around one registry and one message pusher.
    ///
    /// The registry is the only shared mutable state; each call builds an
    /// independent server.
    pub fn new(
        registry: Arc<dyn PresenceRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        let broadcast_presence_usecase = Arc::new(BroadcastPresenceUseCase::new(
            registry.clone(),
            message_pusher.clone(),
        ));

        Self {
            open_connection_usecase: Arc::new(OpenConnectionUseCase::new(message_pusher.clone())),
            connect_presence_usecase: Arc::new(ConnectPresenceUseCase::new(
                registry.clone(),
                broadcast_presence_usecase.clone(),
            )),
            move_presence_usecase: Arc::new(MovePresenceUseCase::new(
                registry.clone(),
                broadcast_presence_usecase.clone(),
            )),
            disconnect_presence_usecase: Arc::new(DisconnectPresenceUseCase::new(
                registry,
                message_pusher,
                broadcast_presence_usecase.clone(),
            )),
            broadcast_presence_usecase,
        }
    }
}
