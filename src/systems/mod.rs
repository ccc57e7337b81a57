mod dispatcher;

pub use dispatcher::ServiceDispatcher;
