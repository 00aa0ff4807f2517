//! JSON-file persistence for an order collection.
//!
//! Each collection lives in its own file and is rewritten whole on every
//! save. A file that does not exist yet reads as an empty collection.
use super::error::OrderError;
use super::types::Order;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A single order ledger file.
#[derive(Debug, Clone)]
pub struct OrderStore {
    path: PathBuf,
}

impl OrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<Order>, OrderError> {
        load_orders(&self.path)
    }

    pub fn save(&self, orders: &[Order]) -> Result<(), OrderError> {
        save_orders(orders, &self.path)
    }
}

/// Read the ledger at `path`.
pub fn load_orders(path: &Path) -> Result<Vec<Order>, OrderError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "order file missing; starting empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(OrderError::StoreRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let orders: Vec<Order> =
        serde_json::from_slice(&bytes).map_err(|err| OrderError::StoreRead {
            path: path.to_path_buf(),
            source: err.into(),
        })?;
    tracing::debug!(path = %path.display(), count = orders.len(), "loaded orders");
    Ok(orders)
}

/// Replace the ledger at `path` with `orders`.
///
/// The JSON is staged in a sibling temp file and renamed over the target, so
/// readers see either the old or the new ledger.
pub fn save_orders(orders: &[Order], path: &Path) -> Result<(), OrderError> {
    let write_err = |source: io::Error| OrderError::StoreWrite {
        path: path.to_path_buf(),
        source,
    };
    let bytes = to_ledger_json(orders).map_err(|err| write_err(err.into()))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;
    let mut staged = staging_file().tempfile_in(parent).map_err(write_err)?;
    staged.write_all(&bytes).map_err(write_err)?;
    staged.flush().map_err(write_err)?;
    // The rename carries the temp file's mode; keep the ledger's own.
    if let Ok(existing) = fs::metadata(path) {
        staged
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?;
    }
    staged.persist(path).map_err(|err| write_err(err.error))?;
    tracing::debug!(path = %path.display(), count = orders.len(), "saved orders");
    Ok(())
}

/// Temp files default to owner-only; a new ledger gets the usual
/// umask-filtered `0o666` instead.
fn staging_file() -> tempfile::Builder<'static, 'static> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".orders").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

/// Pretty JSON with four-space indentation; non-ASCII text is written as-is.
fn to_ledger_json(orders: &[Order]) -> serde_json::Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    orders.serialize(&mut serializer)?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
