mod spinner;
mod toaster;

pub use spinner::LoadingSpinner as Spinner;
pub use toaster::{ToastItem, Toaster};
