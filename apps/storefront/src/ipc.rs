//! # JSON IPC
//!
//! Line-delimited JSON bridge between the frontend and the commands.
//!
//! ## Wire Format
//! ```text
//! request  ─► {"cmd": "add_to_cart", "args": {"productId": "1", "size": "M"}}
//! success  ◄─ {"ok": true,  "data": {...}}
//! failure  ◄─ {"ok": false, "error": {"code": "NOT_FOUND", "message": "..."}}
//! ```
//!
//! One request per line, one reply per line, in order. A failed request
//! never stops the loop; only end of input (or the shutdown signal in
//! `run`) does.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::commands::{cart, config, product};
use crate::error::ApiError;
use crate::AppState;

/// A decoded request line.
#[derive(Debug, Clone, Deserialize)]
pub struct Invocation {
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

/// A reply line.
#[derive(Debug, Serialize)]
struct Reply {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
}

impl From<Result<Value, ApiError>> for Reply {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Reply {
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Reply {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

// =============================================================================
// Argument Payloads
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartArgs {
    product_id: String,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    quantity: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCartItemArgs {
    product_id: String,
    #[serde(default)]
    size: Option<String>,
    quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoveFromCartArgs {
    product_id: String,
    #[serde(default)]
    size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListProductsArgs {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    sort: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetProductArgs {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SearchProductsArgs {
    query: String,
}

fn args<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}

/// Like `args`, but a missing `args` object means all defaults.
fn optional_args<T: DeserializeOwned + Default>(value: Value) -> Result<T, ApiError> {
    if value.is_null() {
        Ok(T::default())
    } else {
        args(value)
    }
}

fn data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs one command against the application state.
pub fn invoke(state: &AppState, invocation: Invocation) -> Result<Value, ApiError> {
    let AppState {
        catalog,
        cart: store,
        config: cfg,
    } = state;
    let Invocation { cmd, args: raw } = invocation;

    match cmd.as_str() {
        "get_cart" => data(cart::get_cart(store, cfg)),
        "add_to_cart" => {
            let a: AddToCartArgs = args(raw)?;
            data(cart::add_to_cart(
                catalog,
                store,
                cfg,
                &a.product_id,
                a.size,
                a.quantity,
            )?)
        }
        "update_cart_item" => {
            let a: UpdateCartItemArgs = args(raw)?;
            data(cart::update_cart_item(
                store,
                cfg,
                &a.product_id,
                a.size,
                a.quantity,
            ))
        }
        "remove_from_cart" => {
            let a: RemoveFromCartArgs = args(raw)?;
            data(cart::remove_from_cart(store, cfg, &a.product_id, a.size))
        }
        "clear_cart" => data(cart::clear_cart(store, cfg)),
        "list_products" => {
            let a: ListProductsArgs = optional_args(raw)?;
            data(product::list_products(
                catalog,
                cfg,
                a.category.as_deref(),
                a.sort.as_deref(),
            )?)
        }
        "featured_products" => data(product::featured_products(catalog, cfg)),
        "get_product" => {
            let a: GetProductArgs = args(raw)?;
            data(product::get_product(catalog, cfg, &a.id)?)
        }
        "search_products" => {
            let a: SearchProductsArgs = args(raw)?;
            data(product::search_products(catalog, cfg, &a.query)?)
        }
        "list_categories" => data(product::list_categories(catalog)),
        "get_config" => data(config::get_config(cfg)),
        other => Err(ApiError::unknown_command(other)),
    }
}

/// Largest accepted request line, in bytes (newline excluded).
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

fn reply_line(result: Result<Value, ApiError>) -> String {
    if let Err(e) = &result {
        warn!(code = ?e.code, message = %e.message, "command failed");
    }

    serde_json::to_string(&Reply::from(result)).unwrap_or_else(|e| {
        format!(
            r#"{{"ok":false,"error":{{"code":"INTERNAL","message":"{}"}}}}"#,
            e.to_string().replace('"', "'")
        )
    })
}

/// Handles one request line and returns the reply line (without newline).
pub fn handle_line(state: &AppState, line: &str) -> String {
    let result = serde_json::from_str::<Invocation>(line)
        .map_err(ApiError::from)
        .and_then(|invocation| {
            debug!(cmd = %invocation.cmd, "invoke");
            invoke(state, invocation)
        });

    reply_line(result)
}

/// Consumes input up to and including the next newline.
async fn discard_line<R>(reader: &mut R) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut scratch = Vec::new();
    loop {
        scratch.clear();
        let n = (&mut *reader)
            .take(MAX_REQUEST_BYTES as u64)
            .read_until(b'\n', &mut scratch)
            .await?;
        if n == 0 || scratch.last() == Some(&b'\n') {
            return Ok(());
        }
    }
}

/// Serves requests from `reader` until end of input, writing replies to
/// `writer`. Blank lines are skipped.
///
/// Lines that are not UTF-8 or exceed [`MAX_REQUEST_BYTES`] get an
/// `INVALID_ARGUMENTS` reply; only I/O errors end the loop.
pub async fn serve<R, W>(state: &AppState, mut reader: R, mut writer: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let n = (&mut reader)
            .take(MAX_REQUEST_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)
            .await?;
        if n == 0 {
            break;
        }

        let terminated = buf.last() == Some(&b'\n');
        if terminated {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        let reply = if buf.len() > MAX_REQUEST_BYTES {
            if !terminated {
                discard_line(&mut reader).await?;
            }
            reply_line(Err(ApiError::invalid_arguments(format!(
                "Request exceeds {} bytes",
                MAX_REQUEST_BYTES
            ))))
        } else {
            match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => handle_line(state, line),
                Err(e) => reply_line(Err(ApiError::invalid_arguments(format!(
                    "Request is not valid UTF-8: {}",
                    e
                )))),
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    debug!("IPC input closed");
    Ok(())
}
