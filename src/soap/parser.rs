//! # Response Parser
//!
//! Turns CountryInfo SOAP responses into [`CountryCode`] lists and
//! [`CountryInfo`] records.
//!
//! Elements are matched on their local name, so `m:sISOCode`, `sISOCode` and
//! `{namespace}sISOCode` are all the same tag while `sISOCodeOld` is not.

use xml::name::OwnedName;
use xml::reader::{EventReader, XmlEvent};

use super::envelope::SERVICE_NAMESPACE;
use crate::error::SoapError;
use crate::repl::models::{CountryCode, CountryInfo, NOT_AVAILABLE};

const ISO_CODE_TAG: &str = "sISOCode";
const RESULT_TAG: &str = "FullCountryInfoResult";

/// Minimal element tree built from the event stream
#[derive(Debug)]
struct Node {
    name: OwnedName,
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn new(name: OwnedName) -> Self {
        Self {
            name,
            text: String::new(),
            children: Vec::new(),
        }
    }

    fn local_name(&self) -> &str {
        &self.name.local_name
    }

    fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// This node and every descendant, in document order
    fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }
}

fn parse_document(xml: &str) -> Result<Node, SoapError> {
    let mut stack: Vec<Node> = Vec::new();
    let mut root = None;

    for event in EventReader::from_str(xml) {
        match event.map_err(|e| SoapError::Parse(e.to_string()))? {
            XmlEvent::StartElement { name, .. } => stack.push(Node::new(name)),
            XmlEvent::Characters(text) | XmlEvent::CData(text) => {
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            XmlEvent::EndElement { .. } => {
                let node = stack
                    .pop()
                    .ok_or_else(|| SoapError::Parse("unbalanced end element".into()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            _ => {}
        }
    }

    root.ok_or_else(|| SoapError::Parse("document has no root element".into()))
}

/// Collect every `sISOCode` value in the document, sorted ascending
pub fn try_parse_country_list(xml: &str) -> Result<Vec<CountryCode>, SoapError> {
    let root = parse_document(xml)?;
    let mut codes: Vec<CountryCode> = root
        .descendants()
        .into_iter()
        .filter(|node| node.local_name() == ISO_CODE_TAG)
        .filter_map(|node| node.text().and_then(CountryCode::parse))
        .collect();
    codes.sort();
    tracing::debug!("Parsed {} country codes", codes.len());
    Ok(codes)
}

/// Like [`try_parse_country_list`], but logs failures and yields an empty list
pub fn parse_country_list(xml: &str) -> Vec<CountryCode> {
    try_parse_country_list(xml).unwrap_or_else(|e| {
        tracing::error!("Could not parse country list: {}", e);
        Vec::new()
    })
}

/// Locate `FullCountryInfoResult`, preferring the service-qualified element
fn find_result(root: &Node) -> Option<&Node> {
    let candidates: Vec<&Node> = root
        .descendants()
        .into_iter()
        .filter(|node| node.local_name() == RESULT_TAG)
        .collect();

    candidates
        .iter()
        .find(|node| node.name.namespace.as_deref() == Some(SERVICE_NAMESPACE))
        .or_else(|| candidates.iter().find(|node| node.name.namespace.is_none()))
        .copied()
}

#[derive(Default)]
struct CountryInfoBuilder {
    name: Option<String>,
    capital: Option<String>,
    currency: Option<String>,
    languages: Vec<String>,
    phone_code: Option<String>,
    continent: Option<String>,
    flag_url: Option<String>,
}

impl CountryInfoBuilder {
    fn apply(&mut self, tag: &str, text: Option<&str>) {
        let value = text.map(str::to_string);
        match tag {
            // The first sName is the country; later ones belong to tLanguage entries
            "sName" if self.name.is_none() => {
                self.name = Some(value.unwrap_or_else(|| NOT_AVAILABLE.to_string()))
            }
            "sName" => self.languages.extend(value),
            "sCapitalCity" => self.capital = value,
            "sCurrencyISOCode" => self.currency = value,
            "sPhoneCode" => self.phone_code = value,
            "sContinentCode" => self.continent = value,
            "sCountryFlag" => self.flag_url = value,
            _ => {}
        }
    }

    fn build(self) -> Result<CountryInfo, SoapError> {
        let or_sentinel = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let name = self.name.ok_or(SoapError::MissingName)?;
        Ok(CountryInfo {
            name,
            capital: or_sentinel(self.capital),
            currency: or_sentinel(self.currency),
            languages: self.languages,
            phone_code: or_sentinel(self.phone_code),
            continent: or_sentinel(self.continent),
            flag_url: or_sentinel(self.flag_url),
        })
    }
}

/// Extract a country record from a `FullCountryInfo` response
pub fn try_parse_country_info(xml: &str) -> Result<CountryInfo, SoapError> {
    let root = parse_document(xml)?;
    let result = find_result(&root).ok_or(SoapError::MissingElement(RESULT_TAG))?;

    let mut builder = CountryInfoBuilder::default();
    for node in result.descendants().into_iter().skip(1) {
        builder.apply(node.local_name(), node.text());
    }
    builder.build()
}
