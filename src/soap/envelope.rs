//! # SOAP Envelope Builder
//!
//! Wraps a method call into the fixed SOAP 1.1 envelope the CountryInfo
//! service expects.

/// Namespace of the CountryInfo service operations
pub const SERVICE_NAMESPACE: &str = "http://www.oorsprong.org/websamples.countryinfo";

/// SOAP 1.1 envelope namespace
pub const ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Content type sent with every call
pub const SOAP_CONTENT_TYPE: &str = "text/xml; charset=utf-8";

/// Operations of the service used by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoapMethod {
    ListOfCountryNamesByCode,
    FullCountryInfo,
}

impl SoapMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SoapMethod::ListOfCountryNamesByCode => "ListOfCountryNamesByCode",
            SoapMethod::FullCountryInfo => "FullCountryInfo",
        }
    }

    /// Value of the `SOAPAction` header for this method
    pub fn soap_action(&self) -> String {
        format!("{}/{}", SERVICE_NAMESPACE, self.name())
    }
}

impl std::fmt::Display for SoapMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the request document for `method`.
///
/// `inner_xml` is inserted verbatim; callers must pass a well-formed fragment.
pub fn build_envelope(method: SoapMethod, inner_xml: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            "\n",
            r#"<soap:Envelope xmlns:soap="{envelope}">"#,
            "\n  <soap:Body>\n",
            r#"    <{method} xmlns="{service}">{inner}</{method}>"#,
            "\n  </soap:Body>\n</soap:Envelope>\n"
        ),
        envelope = ENVELOPE_NAMESPACE,
        service = SERVICE_NAMESPACE,
        method = method.name(),
        inner = inner_xml,
    )
}

/// Parameter fragment for `FullCountryInfo`
pub fn country_code_parameter(code: &str) -> String {
    format!("<sCountryISOCode>{}</sCountryISOCode>", code)
}

/// Headers that accompany a call to `method`
pub fn soap_headers(method: SoapMethod) -> Vec<(String, String)> {
    vec![
        ("Content-Type".to_string(), SOAP_CONTENT_TYPE.to_string()),
        ("SOAPAction".to_string(), method.soap_action()),
    ]
}
