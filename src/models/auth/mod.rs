pub mod requests;
pub mod responses;

pub use requests::SessionRequest;
pub use responses::SessionIssuedResponse;
