// ABOUTME: Factory for assembling gateway clients over a caller-supplied transport
// ABOUTME: Provides convenient constructors mirroring the credential shapes callers hold

use crate::client::gateway::IpxClient;
use crate::client::traits::SoapTransport;
use crate::client::types::Credentials;

/// Factory for creating gateway clients.
///
/// The transport collaborator is constructed by the caller (it owns the
/// endpoint and timeout configuration); the builder pairs it with account
/// credentials.
pub struct ClientBuilder;

impl ClientBuilder {
    /// Create a client from a transport and prepared credentials.
    pub fn client<T: SoapTransport>(transport: T, credentials: Credentials) -> IpxClient<T> {
        IpxClient::new(transport, credentials)
    }

    /// Quick client creation from bare username and password.
    pub fn quick_client<T: SoapTransport>(
        transport: T,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> IpxClient<T> {
        Self::client(transport, Credentials::new(username, password))
    }
}
