use super::{build_record, RecordTypeMapper};
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use kvdns_application::use_cases::ResolveRecordsUseCase;
use kvdns_domain::{AnswerRecord, DnsQuery, DomainError, ZoneSet};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// hickory request handler answering from the key-value store.
///
/// Names outside `zones` are refused. Misses inside a `fallthrough` zone are
/// refused as well so the client moves on to its next server; other misses
/// are NXDOMAIN.
#[derive(Clone)]
pub struct KvDnsHandler {
    use_case: Arc<ResolveRecordsUseCase>,
    zones: ZoneSet,
    fallthrough: ZoneSet,
}

impl KvDnsHandler {
    pub fn new(use_case: Arc<ResolveRecordsUseCase>, zones: ZoneSet) -> Self {
        Self {
            use_case,
            zones,
            fallthrough: ZoneSet::default(),
        }
    }

    pub fn with_fallthrough(mut self, fallthrough: ZoneSet) -> Self {
        self.fallthrough = fallthrough;
        self
    }

    /// Lowercased name without the trailing dot, as used for key lookups.
    pub fn normalize_domain(domain: &str) -> String {
        domain.trim_end_matches('.').to_ascii_lowercase()
    }

    pub fn serves(&self, domain: &str) -> bool {
        self.zones.matches(domain).is_some()
    }

    pub fn response_code(&self, domain: &str, error: &DomainError) -> ResponseCode {
        match error {
            DomainError::UnsupportedType(_) => ResponseCode::NotImp,
            DomainError::NotFound(_) if self.fallthrough.matches(domain).is_some() => {
                ResponseCode::Refused
            }
            DomainError::NotFound(_) => ResponseCode::NXDomain,
            DomainError::Backend(_) => ResponseCode::ServFail,
        }
    }

    /// Answers that hickory cannot represent are dropped with a warning.
    pub fn to_records(answers: &[AnswerRecord]) -> Vec<Record> {
        answers
            .iter()
            .filter_map(|answer| match build_record(answer) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(owner = %answer.owner, data = ?answer.data, error = %e, "Unrepresentable answer, skipping");
                    None
                }
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl RequestHandler for KvDnsHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let owner = query.original().name().to_string();
        let domain = Self::normalize_domain(&owner);
        let query_type = RecordTypeMapper::query_type(query.query_type());

        debug!(domain = %domain, record_type = %query_type, client = %request.src().ip(), "DNS query received");

        if !self.serves(&domain) {
            debug!(domain = %domain, "Name outside served zones");
            return send_error_response(request, &mut response_handle, ResponseCode::Refused)
                .await;
        }

        let dns_query = DnsQuery::new(domain.clone(), query_type)
            .with_owner(owner, u16::from(query.query_class()));

        let answers = match self.use_case.execute(&dns_query).await {
            Ok(answers) => answers,
            Err(e) => {
                let code = self.response_code(&domain, &e);
                match &e {
                    DomainError::Backend(_) => {
                        error!(domain = %domain, error = %e, "Query resolution failed")
                    }
                    _ => debug!(domain = %domain, error = %e, code = ?code, "No answer"),
                }
                return send_error_response(request, &mut response_handle, code).await;
            }
        };

        let records = Self::to_records(&answers);

        debug!(domain = %domain, answers = records.len(), "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = Header::response_from_request(request.header());
        header.set_authoritative(true);
        let response = builder.build(header, records.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
