// SPDX-License-Identifier: Apache-2.0

use crate::error::{SheetError, SheetErrorCode};
use crate::instrument::{NoopInstrumentation, StoreInstrumentation};
use crate::wire::{decode_body, form_fields, FetchEnvelope, WriteEnvelope};
use crewdesk_core::ServiceConfig;
use crewdesk_model::{MutationRequest, RawRow, SheetName};
use reqwest::blocking::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Read side of the backing sheet service.
pub trait RowSource {
    fn fetch_rows(&self, sheet: &SheetName) -> Result<Vec<RawRow>, SheetError>;
}

/// Confirmation of an accepted write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReceipt {
    pub file_url: Option<String>,
}

/// Write side of the backing sheet service.
pub trait RowSink {
    fn execute(&self, request: &MutationRequest) -> Result<WriteReceipt, SheetError>;
}

/// Blocking client for the Apps-Script-style sheet endpoint. One instance per
/// process. No timeout is configured, so a hung request blocks its read cycle
/// until the transport gives up.
pub struct SheetClient {
    config: ServiceConfig,
    http: Client,
    bust_counter: AtomicU64,
    instrumentation: Arc<dyn StoreInstrumentation>,
}

impl SheetClient {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config,
            http: Client::new(),
            bust_counter: AtomicU64::new(0),
            instrumentation: Arc::new(NoopInstrumentation),
        }
    }

    #[must_use]
    pub fn with_instrumentation(mut self, instrumentation: Arc<dyn StoreInstrumentation>) -> Self {
        self.instrumentation = instrumentation;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn cache_bust_value(&self) -> String {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let tick = self.bust_counter.fetch_add(1, Ordering::Relaxed);
        format!("{seed}{tick}")
    }

    fn read_body(response: reqwest::blocking::Response) -> Result<String, SheetError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::new(
                SheetErrorCode::Status,
                format!("service answered HTTP {status}"),
            ));
        }
        response
            .text()
            .map_err(|err| SheetError::new(SheetErrorCode::Network, err.to_string()))
    }

    fn observe_failure(&self, err: SheetError) -> SheetError {
        self.instrumentation.observe_error(err.code);
        err
    }
}

impl RowSource for SheetClient {
    fn fetch_rows(&self, sheet: &SheetName) -> Result<Vec<RawRow>, SheetError> {
        let started = Instant::now();
        let mut query: Vec<(&str, String)> = vec![
            ("sheet", sheet.as_str().to_string()),
            ("action", "fetch".to_string()),
        ];
        if self.config.cache_bust {
            query.push(("_", self.cache_bust_value()));
        }

        let response = self
            .http
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .map_err(|err| {
                self.observe_failure(SheetError::new(SheetErrorCode::Network, err.to_string()))
            })?;
        let body = Self::read_body(response).map_err(|err| self.observe_failure(err))?;
        let envelope: FetchEnvelope = decode_body(&body).map_err(|err| self.observe_failure(err))?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "service reported failure without a message".to_string());
            warn!(sheet = sheet.as_str(), error = %message, "sheet fetch rejected");
            return Err(self.observe_failure(SheetError::new(SheetErrorCode::Application, message)));
        }

        let rows = envelope.data.unwrap_or_default();
        debug!(
            sheet = sheet.as_str(),
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sheet fetched"
        );
        self.instrumentation
            .observe_fetch(sheet.as_str(), rows.len(), started.elapsed());
        Ok(rows)
    }
}

impl RowSink for SheetClient {
    fn execute(&self, request: &MutationRequest) -> Result<WriteReceipt, SheetError> {
        let started = Instant::now();
        let fields = form_fields(request).map_err(|err| self.observe_failure(err))?;

        let response = self
            .http
            .post(&self.config.base_url)
            .form(&fields)
            .send()
            .map_err(|err| {
                self.observe_failure(SheetError::new(SheetErrorCode::Network, err.to_string()))
            })?;
        let body = Self::read_body(response).map_err(|err| self.observe_failure(err))?;
        let envelope: WriteEnvelope = decode_body(&body).map_err(|err| self.observe_failure(err))?;

        if !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| "service reported failure without a message".to_string());
            warn!(
                action = request.action(),
                sheet = request.sheet.as_str(),
                error = %message,
                "sheet write rejected"
            );
            return Err(self.observe_failure(SheetError::new(SheetErrorCode::Application, message)));
        }

        debug!(
            action = request.action(),
            sheet = request.sheet.as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "sheet write accepted"
        );
        self.instrumentation
            .observe_write(request.action(), started.elapsed());
        Ok(WriteReceipt {
            file_url: envelope.file_url,
        })
    }
}
