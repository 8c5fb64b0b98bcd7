pub mod config;
pub mod domain {
    pub mod event;
    pub mod order;
    pub mod payment;
}
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod webhook;
    }
}
pub mod processor;
pub mod repo {
    pub mod event_ledger_repo;
    pub mod orders_repo;
    pub mod payment_records_repo;
}
pub mod service {
    pub mod notifier;
    pub mod reconciler;
}
pub mod signature;

#[derive(Clone)]
pub struct AppState {
    pub reconciler: service::reconciler::ReconcileService,
    pub webhook_secret: String,
    pub signature_tolerance_secs: i64,
}
