use crate::config::SolrConfig;
use crate::error::{Result, SolrError};
use crate::response::SolrSelectResponse;
use gazette_model::{ResultEntry, ResultSet};
use reqwest::{redirect, Client};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Client for the backend Solr select handler.
///
/// One instance is shared by all requests. The semaphore bounds outbound
/// concurrency so a burst of requests cannot overrun the backend.
pub struct SolrClient {
    http: Client,
    config: SolrConfig,
    limiter: Semaphore,
}

impl SolrClient {
    pub fn new(config: SolrConfig) -> Result<Self> {
        let http = Client::builder()
            .redirect(redirect::Policy::none())
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(SolrError::Client)?;
        let limiter = Semaphore::new(config.max_concurrent_requests);
        Ok(Self {
            http,
            config,
            limiter,
        })
    }

    pub fn config(&self) -> &SolrConfig {
        &self.config
    }

    /// Run the two-phase probe/fetch search for one request.
    ///
    /// The probe asks for zero rows to learn the total match count, and the
    /// requested offset is validated against it before the expensive
    /// highlighted window is fetched.
    pub async fn execute(
        &self,
        resource_pid: &str,
        query: &str,
        offset: u64,
        limit: u32,
    ) -> Result<ResultSet> {
        let probe = self.select(query, 0, 0).await?;
        let total = probe.response.num_found;
        tracing::debug!(total, query, "probe phase complete");

        ensure_offset_within(offset, total)?;

        let fetched = self.select(query, limit, offset).await?;
        let entries = entries_from_response(fetched, &self.config.highlight_field);
        tracing::debug!(returned = entries.len(), "fetch phase complete");

        Ok(ResultSet::new(resource_pid, query, entries, total, offset))
    }

    async fn select(&self, query: &str, rows: u32, start: u64) -> Result<SolrSelectResponse> {
        // The semaphore is created at construction and never closed.
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| SolrError::LimiterClosed)?;

        let rows = rows.to_string();
        let start = start.to_string();
        let fragment_size = self.config.fragment_size.to_string();
        let params: [(&str, &str); 13] = [
            ("q", query),
            ("hl", "true"),
            ("hl.fl", &self.config.highlight_field),
            ("hl.bs.type", &self.config.boundary_scanner),
            ("hl.fragsize", &fragment_size),
            ("hl.method", &self.config.highlight_method),
            ("fl", &self.config.field_list),
            ("df", &self.config.default_field),
            ("hl.simple.pre", &self.config.hit_open),
            ("hl.simple.post", &self.config.hit_close),
            ("wt", "json"),
            ("rows", &rows),
            ("start", &start),
        ];

        let response = self
            .http
            .get(&self.config.select_url)
            .query(&params)
            .send()
            .await
            .map_err(|source| SolrError::Unavailable {
                url: self.config.select_url.clone(),
                source,
            })?;

        let url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), url = %url, "backend rejected select");
            return Err(SolrError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<SolrSelectResponse>()
            .await
            .map_err(|source| SolrError::Unavailable { url, source })
    }
}

/// Offsets are validated here because Solr itself accepts out-of-range
/// starts and answers them with an empty page. A zero offset is always in
/// range so that zero-match queries still produce an empty result set.
fn ensure_offset_within(offset: u64, total: u64) -> Result<()> {
    if offset > 0 && offset >= total {
        return Err(SolrError::OffsetOutOfRange { offset, total });
    }
    Ok(())
}

/// Assemble result entries from a fetch response, joining each document row
/// with its highlight fragments. Rows without a usable id are dropped; the
/// backend occasionally returns incomplete rows and they are not worth
/// failing the whole request over.
pub fn entries_from_response(
    response: SolrSelectResponse,
    highlight_field: &str,
) -> Vec<ResultEntry> {
    let mut entries = Vec::with_capacity(response.response.docs.len());
    for doc in response.response.docs {
        let id = match doc.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                tracing::debug!("skipping result row without document id");
                continue;
            }
        };
        let fragments = response
            .highlighting
            .get(&id)
            .and_then(|fields| fields.get(highlight_field))
            .cloned()
            .unwrap_or_default();
        let mut entry = ResultEntry::new(
            id,
            doc.pagenumber.unwrap_or_default(),
            doc.paper_title.unwrap_or_default(),
        );
        entry.set_highlights(&fragments);
        entries.push(entry);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const FETCH_RESPONSE: &str = r#"{
        "response": {
            "numFound": 2,
            "docs": [
                {"id": "AAAABBBBCCCCDDDDEEEEFFFFGGGGHHHH0001", "paper_title": "Morgenpost", "pagenumber": "3"},
                {"id": "  "},
                {"id": "AAAABBBBCCCCDDDDEEEEFFFFGGGGHHHH0002", "paper_title": "Abendblatt", "pagenumber": "12"}
            ]
        },
        "highlighting": {
            "AAAABBBBCCCCDDDDEEEEFFFFGGGGHHHH0001": {
                "plainpagefulltext": ["Ship met the <Hit>storm</Hit>"]
            },
            "AAAABBBBCCCCDDDDEEEEFFFFGGGGHHHH0002": {
                "plainpagefulltext": []
            }
        }
    }"#;

    #[test]
    fn parses_select_response() {
        let parsed: SolrSelectResponse = serde_json::from_str(FETCH_RESPONSE).unwrap();
        assert_eq!(parsed.response.num_found, 2);
        assert_eq!(parsed.response.docs.len(), 3);
        assert_eq!(parsed.highlighting.len(), 2);
    }

    #[test]
    fn probe_response_needs_no_docs_or_highlighting() {
        let parsed: SolrSelectResponse =
            serde_json::from_str(r#"{"response": {"numFound": 17}}"#).unwrap();
        assert_eq!(parsed.response.num_found, 17);
        assert!(parsed.response.docs.is_empty());
        assert!(parsed.highlighting.is_empty());
    }

    #[test]
    fn entry_assembly_skips_blank_ids_and_joins_highlights() {
        let parsed: SolrSelectResponse = serde_json::from_str(FETCH_RESPONSE).unwrap();
        let entries = entries_from_response(parsed, "plainpagefulltext");
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].highlights(),
            ["Ship met the <Hit>storm</Hit>"]
        );
        assert_eq!(entries[0].page_number(), "3");
        assert_eq!(entries[0].title(), "Morgenpost");
        assert!(entries[1].highlights().is_empty());
    }

    #[tokio::test]
    async fn closed_limiter_fails_the_call_instead_of_panicking() {
        let client = SolrClient::new(SolrConfig::default()).unwrap();
        client.limiter.close();
        let err = client.select("\"storm\"", 0, 0).await.unwrap_err();
        assert!(matches!(err, SolrError::LimiterClosed));
    }

    #[test]
    fn offset_within_total_is_accepted() {
        assert!(ensure_offset_within(4, 5).is_ok());
        assert!(ensure_offset_within(0, 5).is_ok());
    }

    #[test]
    fn offset_at_total_is_rejected() {
        let err = ensure_offset_within(5, 5).unwrap_err();
        assert!(matches!(
            err,
            SolrError::OffsetOutOfRange { offset: 5, total: 5 }
        ));
    }

    #[test]
    fn zero_offset_on_zero_matches_is_accepted() {
        assert!(ensure_offset_within(0, 0).is_ok());
    }

    #[test]
    fn positive_offset_on_zero_matches_is_rejected() {
        assert!(ensure_offset_within(3, 0).is_err());
    }
}
