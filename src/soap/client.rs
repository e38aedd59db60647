//! # CountryInfo Client
//!
//! Combines envelope, transport and parser into the two calls the REPL needs.

use super::envelope::{build_envelope, country_code_parameter, soap_headers, SoapMethod};
use super::parser::{parse_country_list, try_parse_country_info};
use super::transport::Transport;
use crate::error::SoapError;
use crate::repl::models::{CountryCode, CountryInfo};

/// Lookups offered by the country service
pub trait CountryService {
    /// All ISO codes known to the service, sorted ascending
    fn country_codes(&self) -> Result<Vec<CountryCode>, SoapError>;

    /// Details for a single code
    fn country_info(&self, code: &CountryCode) -> Result<CountryInfo, SoapError>;
}

pub struct SoapClient<T: Transport> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> SoapClient<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn call(&self, method: SoapMethod, inner_xml: &str) -> Result<String, SoapError> {
        tracing::debug!("Calling {} on {}", method, self.endpoint);
        let body = build_envelope(method, inner_xml);
        self.transport
            .post(&self.endpoint, &body, &soap_headers(method))
    }
}

impl<T: Transport> CountryService for SoapClient<T> {
    /// A response that cannot be parsed yields an empty list
    fn country_codes(&self) -> Result<Vec<CountryCode>, SoapError> {
        let xml = self.call(SoapMethod::ListOfCountryNamesByCode, "")?;
        Ok(parse_country_list(&xml))
    }

    fn country_info(&self, code: &CountryCode) -> Result<CountryInfo, SoapError> {
        let xml = self.call(
            SoapMethod::FullCountryInfo,
            &country_code_parameter(code.as_str()),
        )?;
        try_parse_country_info(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records each call and replies with a canned body
    struct RecordingTransport {
        reply: Result<String, u16>,
        calls: RefCell<Vec<(String, String, Vec<(String, String)>)>>,
    }

    impl RecordingTransport {
        fn replying(body: &str) -> Self {
            Self {
                reply: Ok(body.to_string()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for RecordingTransport {
        fn post(
            &self,
            url: &str,
            body: &str,
            headers: &[(String, String)],
        ) -> Result<String, SoapError> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), body.to_string(), headers.to_vec()));
            match &self.reply {
                Ok(body) => Ok(body.clone()),
                Err(status) => Err(SoapError::Status { status: *status }),
            }
        }
    }

    #[test]
    fn country_codes_posts_list_envelope() {
        let transport =
            RecordingTransport::replying("<r><sISOCode>US</sISOCode><sISOCode>PE</sISOCode></r>");
        let client = SoapClient::new(transport, "http://svc/endpoint");

        let codes = client.country_codes().unwrap();
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].as_str(), "PE");

        let calls = client.transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (url, body, headers) = &calls[0];
        assert_eq!(url, "http://svc/endpoint");
        assert!(body.contains("<ListOfCountryNamesByCode"));
        assert!(headers.contains(&(
            "SOAPAction".to_string(),
            "http://www.oorsprong.org/websamples.countryinfo/ListOfCountryNamesByCode".to_string()
        )));
    }

    #[test]
    fn country_info_sends_code_parameter() {
        let transport = RecordingTransport::replying(
            "<r><FullCountryInfoResult><sName>Peru</sName></FullCountryInfoResult></r>",
        );
        let client = SoapClient::new(transport, "http://svc");
        let code = CountryCode::parse("pe").unwrap();

        let info = client.country_info(&code).unwrap();
        assert_eq!(info.name, "Peru");

        let calls = client.transport.calls.borrow();
        assert!(calls[0]
            .1
            .contains("<sCountryISOCode>PE</sCountryISOCode>"));
    }

    #[test]
    fn transport_failure_is_returned() {
        let client = SoapClient::new(RecordingTransport::failing(404), "http://svc");
        let err = client.country_codes().unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn unparseable_list_is_empty() {
        let client = SoapClient::new(RecordingTransport::replying("<r><sISOCode>PE"), "http://svc");
        assert!(client.country_codes().unwrap().is_empty());
    }

    #[test]
    fn unparseable_info_is_a_payload_error() {
        let client = SoapClient::new(RecordingTransport::replying("<r><x/></r>"), "http://svc");
        let err = client
            .country_info(&CountryCode::parse("PE").unwrap())
            .unwrap_err();
        assert!(!err.is_transport());
    }
}
