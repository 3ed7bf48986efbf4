//! Solana JSON-RPC client
//!
//! Thin HTTP client for the two lookups the service needs: account balance
//! and transaction confirmation.

use crate::address::{parse_address, parse_signature};
use crate::error::{ChainError, ChainResult};
use crate::ChainClient;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tipjar_core::Lamports;

/// Commitment level used for every query
const COMMITMENT: &str = "confirmed";

#[derive(Debug)]
pub struct SolanaRpcClient {
    endpoint: String,
    client: Client,
    next_id: AtomicU64,
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct BalanceResult {
    value: u64,
}

impl SolanaRpcClient {
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> ChainResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let endpoint = endpoint.into();
        tracing::info!("📡 Chain RPC client initialized: {}", endpoint);

        Ok(Self {
            endpoint,
            client,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one JSON-RPC call. `Ok(None)` means the node answered with a
    /// null result.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> ChainResult<Option<T>> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        tracing::debug!("→ {} {}", method, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!("⚠️ {} failed: HTTP {}", method, response.status());
            return Err(ChainError::Http(response.status().as_u16()));
        }

        let body: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;

        if let Some(error) = body.error {
            tracing::warn!(
                "⚠️ {} returned RPC error {}: {}",
                method,
                error.code,
                error.message
            );
            return Err(ChainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        Ok(body.result)
    }
}

#[async_trait]
impl ChainClient for SolanaRpcClient {
    async fn get_balance(&self, address: &str) -> ChainResult<Lamports> {
        parse_address(address)?;

        let result: Option<BalanceResult> = self
            .call("getBalance", json!([address, { "commitment": COMMITMENT }]))
            .await?;

        let balance = result
            .ok_or_else(|| {
                ChainError::InvalidResponse("getBalance returned no result".to_string())
            })?
            .value;
        tracing::debug!("✅ Balance for {}: {} lamports", address, balance);
        Ok(balance)
    }

    async fn get_transaction_confirmed(&self, signature: &str) -> ChainResult<bool> {
        parse_signature(signature)?;

        let result: Option<Value> = self
            .call(
                "getTransaction",
                json!([
                    signature,
                    {
                        "encoding": "json",
                        "commitment": COMMITMENT,
                        "maxSupportedTransactionVersion": 0
                    }
                ]),
            )
            .await?;

        Ok(result.is_some())
    }
}
