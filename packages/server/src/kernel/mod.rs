// Infrastructure kernel - collaborator traits and their concrete clients.
//
// Business logic in domains/ never names a vendor; it sees only the
// Base* traits defined here.

pub mod cloudinary_client;
pub mod deps;
pub mod email_template;
pub mod resend_client;
pub mod test_dependencies;
pub mod traits;

pub use cloudinary_client::CloudinaryClient;
pub use deps::ServerDeps;
pub use resend_client::{NoopMailer, ResendMailer};
pub use test_dependencies::{MockImageStore, MockMailer};
pub use traits::{BaseImageStore, BaseMailer};
