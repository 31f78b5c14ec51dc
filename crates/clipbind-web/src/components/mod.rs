mod copy_button;
mod snippet;

pub use copy_button::CopyButton;
pub use snippet::Snippet;
