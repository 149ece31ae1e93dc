// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthTokenDto,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::account::AccountId;
use crate::infrastructure::security::claims::{
    ACCOUNT_CLAIM_QUERY, ACCOUNT_FACT, parse_account_claim,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Ed25519-signed biscuit tokens whose authority block
/// holds one `account(id)` fact. Without a TTL the token never expires.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Option<Duration>,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Option<Duration>) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self::from_keypair(KeyPair::from(&private), ttl))
    }

    /// Fresh random root key. Tokens from one instance are rejected by any
    /// other.
    pub fn ephemeral(ttl: Option<Duration>) -> Self {
        Self::from_keypair(KeyPair::new(), ttl)
    }

    fn from_keypair(keypair: KeyPair, ttl: Option<Duration>) -> Self {
        let public = keypair.public();
        Self {
            root: Arc::new(keypair),
            public,
            ttl,
        }
    }

    fn build_token(
        &self,
        account_id: AccountId,
        expires_at: Option<SystemTime>,
    ) -> ApplicationResult<String> {
        let mut code = format!("{ACCOUNT_FACT}({{id}});\n");
        let mut params: HashMap<String, Term> = HashMap::new();
        params.insert("id".to_string(), i64::from(account_id).into());

        if let Some(expires_at) = expires_at {
            code.push_str("check if time($time), $time <= {exp};\n");
            params.insert("exp".to_string(), expires_at.into());
        }

        let token = Biscuit::builder()
            .code_with_params(&code, params, HashMap::new())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(self.root.as_ref())
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        token
            .seal()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_base64()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, account_id: AccountId) -> ApplicationResult<AuthTokenDto> {
        let expires_at = match self.ttl {
            Some(ttl) => Some(
                SystemTime::now()
                    .checked_add(ttl)
                    .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?,
            ),
            None => None,
        };

        let token = self.build_token(account_id, expires_at)?;
        Ok(AuthTokenDto {
            token,
            expires_at: expires_at.map(DateTime::<Utc>::from),
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<AccountId> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        // Token checks (expiry) run here; the policy itself admits any
        // correctly signed token.
        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true;")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;

        let ids: Vec<(i64,)> = authorizer
            .query(ACCOUNT_CLAIM_QUERY)
            .map_err(|err| ApplicationError::invalid_token(err.to_string()))?;
        parse_account_claim(ids)
    }
}
