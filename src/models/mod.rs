pub mod role_scopes;

pub use role_scopes::RoleScopesResponse;
