//! Authentication module

pub mod context;

// Re-export commonly used items
pub use context::{
    RouterNavigate, SessionContext, SessionProvider, TokenAction, TokenState,
    use_is_authenticated, use_session, use_session_context, use_tokens,
};
