//! Shared fixtures for the integration tests: canned SOAP responses, a
//! scripted country service and wiremock helpers.

#![allow(dead_code)]

use countryline::repl::views::PlainStyler;
use countryline::{
    ConsoleView, CountryCode, CountryInfo, CountryService, MockLineSource, ReplController,
    SoapError,
};
use std::cell::Cell;
use std::path::PathBuf;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LIST_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <m:ListOfCountryNamesByCodeResponse xmlns:m="http://www.oorsprong.org/websamples.countryinfo">
      <m:ListOfCountryNamesByCodeResult>
        <m:tCountryCodeAndName><m:sISOCode>US</m:sISOCode><m:sName>United States</m:sName></m:tCountryCodeAndName>
        <m:tCountryCodeAndName><m:sISOCode>PE</m:sISOCode><m:sName>Peru</m:sName></m:tCountryCodeAndName>
        <m:tCountryCodeAndName><m:sISOCode>ES</m:sISOCode><m:sName>Spain</m:sName></m:tCountryCodeAndName>
        <m:tCountryCodeAndName><m:sISOCode>AR</m:sISOCode><m:sName>Argentina</m:sName></m:tCountryCodeAndName>
      </m:ListOfCountryNamesByCodeResult>
    </m:ListOfCountryNamesByCodeResponse>
  </soap:Body>
</soap:Envelope>"#;

pub const PERU_RESPONSE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
  <soap:Body>
    <m:FullCountryInfoResponse xmlns:m="http://www.oorsprong.org/websamples.countryinfo">
      <m:FullCountryInfoResult>
        <m:sISOCode>PE</m:sISOCode>
        <m:sName>Peru</m:sName>
        <m:sCapitalCity>Lima</m:sCapitalCity>
        <m:sPhoneCode>51</m:sPhoneCode>
        <m:sContinentCode>AM</m:sContinentCode>
        <m:sCurrencyISOCode>PEN</m:sCurrencyISOCode>
        <m:sCountryFlag>http://www.oorsprong.org/WebSamples.CountryInfo/Flags/Peru.jpg</m:sCountryFlag>
        <m:Languages>
          <m:tLanguage><m:sISOCode>es</m:sISOCode><m:sName>Spanish</m:sName></m:tLanguage>
          <m:tLanguage><m:sISOCode>qu</m:sISOCode><m:sName>Quechua</m:sName></m:tLanguage>
        </m:Languages>
      </m:FullCountryInfoResult>
    </m:FullCountryInfoResponse>
  </soap:Body>
</soap:Envelope>"#;

pub fn peru() -> CountryInfo {
    CountryInfo {
        name: "Peru".into(),
        capital: "Lima".into(),
        currency: "PEN".into(),
        languages: vec!["Spanish".into(), "Quechua".into()],
        phone_code: "51".into(),
        continent: "AM".into(),
        flag_url: "http://www.oorsprong.org/WebSamples.CountryInfo/Flags/Peru.jpg".into(),
    }
}

pub fn codes(raw: &[&str]) -> Vec<CountryCode> {
    raw.iter().filter_map(|c| CountryCode::parse(c)).collect()
}

/// In-memory country service that counts the calls it receives
pub struct ScriptedService {
    codes: Vec<CountryCode>,
    fail_lookups: bool,
    pub code_calls: Cell<usize>,
    pub info_calls: Cell<usize>,
}

impl ScriptedService {
    pub fn with_codes(raw: &[&str]) -> Self {
        Self {
            codes: codes(raw),
            fail_lookups: false,
            code_calls: Cell::new(0),
            info_calls: Cell::new(0),
        }
    }

    pub fn failing_lookups(mut self) -> Self {
        self.fail_lookups = true;
        self
    }
}

impl CountryService for ScriptedService {
    fn country_codes(&self) -> Result<Vec<CountryCode>, SoapError> {
        self.code_calls.set(self.code_calls.get() + 1);
        Ok(self.codes.clone())
    }

    fn country_info(&self, code: &CountryCode) -> Result<CountryInfo, SoapError> {
        self.info_calls.set(self.info_calls.get() + 1);
        if self.fail_lookups {
            return Err(SoapError::Status { status: 404 });
        }
        match code.as_str() {
            "PE" => Ok(peru()),
            other => Ok(CountryInfo::named(format!("Country {}", other))),
        }
    }
}

pub type TestController<S> = ReplController<S, MockLineSource, Vec<u8>>;

pub fn controller<S: CountryService>(service: S, lines: &[&str], export_path: PathBuf) -> TestController<S> {
    let view = ConsoleView::new(Vec::new(), Box::new(PlainStyler));
    ReplController::new(
        service,
        MockLineSource::from_lines(lines.iter().copied()),
        view,
        export_path,
    )
}

pub fn screen<S: CountryService>(controller: &TestController<S>) -> String {
    String::from_utf8_lossy(controller.view().writer()).into_owned()
}

/// Mount a 200 response for a SOAPAction on the mock server
pub async fn mount_soap(server: &MockServer, action: &str, body: &str) {
    Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::header(
            "SOAPAction",
            format!("http://www.oorsprong.org/websamples.countryinfo/{}", action).as_str(),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/xml; charset=utf-8")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}
