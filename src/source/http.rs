//! HTTP source for the json-server style pets API
//!
//! `GET /pets?_page=&_limit=&_sort=&_order=` for pages (total in the
//! `X-Total-Count` header), `GET /pets` for the whole collection and
//! `GET /pets/{id}` for a single pet.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::{Pet, PetId, PetPage};
use crate::error::AppError;
use crate::utils::debug_log;

use super::validate::{keep_valid, validate_record};
use super::{PageQuery, PetSource};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const FETCH_RETRIES: usize = 3;
const RETRY_BACKOFF_MS: u64 = 250;
const TOTAL_COUNT_HEADER: &str = "x-total-count";

struct Fetched<T> {
    value: T,
    total_count: Option<u64>,
}

pub(crate) struct HttpPetSource {
    base_url: String,
    agent: ureq::Agent,
    retries: usize,
    backoff: Duration,
}

impl HttpPetSource {
    pub(crate) fn new(base_url: &str) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            agent,
            retries: FETCH_RETRIES,
            backoff: Duration::from_millis(RETRY_BACKOFF_MS),
        }
    }

    pub(crate) fn pets_url(&self) -> String {
        format!("{}/pets", self.base_url)
    }

    pub(crate) fn page_url(&self, query: &PageQuery) -> String {
        format!(
            "{}?_page={}&_limit={}&_sort={}&_order={}",
            self.pets_url(),
            query.page.max(1),
            query.limit.max(1),
            query.sort.key.as_str(),
            query.sort.direction.as_str()
        )
    }

    pub(crate) fn pet_url(&self, id: &PetId) -> String {
        format!("{}/{}", self.pets_url(), id)
    }

    fn fetch_once<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>, AppError> {
        let response = self.agent.get(url).call().map_err(|e| AppError::Http {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(AppError::Status {
                url: url.to_string(),
                status,
            });
        }

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let mut body = response.into_body();
        let value = serde_json::from_reader(body.as_reader()).map_err(|source| {
            AppError::Decode {
                url: url.to_string(),
                source,
            }
        })?;

        Ok(Fetched { value, total_count })
    }

    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>, AppError> {
        let mut attempt = 0;
        loop {
            debug_log(format!("GET {url} (attempt {})", attempt + 1));
            match self.fetch_once(url) {
                Ok(fetched) => return Ok(fetched),
                Err(e) if e.is_retryable() && attempt + 1 < self.retries => {
                    debug_log(format!("retrying after error: {e}"));
                    attempt += 1;
                    std::thread::sleep(self.backoff * attempt as u32);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl PetSource for HttpPetSource {
    fn describe(&self) -> String {
        self.base_url.clone()
    }

    fn fetch_page(&self, query: &PageQuery) -> Result<PetPage, AppError> {
        let fetched: Fetched<Vec<Value>> = self.fetch(&self.page_url(query))?;
        // Without the header, assume nothing exists past this page
        let seen = u64::from(query.page.max(1) - 1) * u64::from(query.limit.max(1))
            + fetched.value.len() as u64;
        Ok(PetPage {
            pets: keep_valid(fetched.value),
            total_count: fetched.total_count.unwrap_or(seen),
        })
    }

    fn fetch_all(&self) -> Result<Vec<Pet>, AppError> {
        let fetched: Fetched<Vec<Value>> = self.fetch(&self.pets_url())?;
        Ok(keep_valid(fetched.value))
    }

    fn fetch_by_id(&self, id: &PetId) -> Result<Pet, AppError> {
        let fetched: Fetched<Value> = match self.fetch(&self.pet_url(id)) {
            Err(AppError::Status { status: 404, .. }) => {
                return Err(AppError::PetNotFound { id: id.to_string() });
            }
            other => other?,
        };
        Ok(validate_record(fetched.value)?)
    }
}
