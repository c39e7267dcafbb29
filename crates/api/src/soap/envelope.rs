//! Reading and writing SOAP 1.1 envelopes.
//!
//! Requests are matched on local element names, so any namespace prefix the
//! caller picks is accepted. Responses always use the `soap` and `tns`
//! prefixes.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use thiserror::Error;

use super::fault::Fault;
use super::operation::SoapResult;

/// SOAP 1.1 envelope namespace.
pub const SOAP_ENV_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Target namespace of the service.
pub const TARGET_NS: &str = "currency.soap";

/// Operation call extracted from a request envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    /// Local name of the operation element.
    pub operation: String,
    /// Parameters in document order, keyed by local element name.
    pub params: Vec<(String, String)>,
}

impl SoapRequest {
    /// Returns the first parameter with the given name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Failure while rendering a response envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Writer failed.
    #[error("failed to write XML: {0}")]
    Io(#[from] std::io::Error),

    /// Writer rejected an event.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Output was not UTF-8.
    #[error("response is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// Element depths inside a request document.
const ENVELOPE_DEPTH: usize = 1;
const BODY_CHILD_DEPTH: usize = 3;
const PARAM_DEPTH: usize = 4;

/// Extracts the operation call from a request envelope.
///
/// The body must hold exactly one operation element; its direct children are
/// the parameters. Deeper nesting is ignored.
pub fn parse_request(xml: &str) -> Result<SoapRequest, Fault> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut operation: Option<String> = None;
    let mut params: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, String)> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Fault::client(format!("Malformed XML: {e}")))?;

        match event {
            Event::Start(start) => {
                let name = local_name(&start)?;
                open_element(&path, &name, &mut operation, &mut current)?;
                path.push(name);
            }
            Event::Empty(start) => {
                let name = local_name(&start)?;
                open_element(&path, &name, &mut operation, &mut current)?;
                if path.len() + 1 == PARAM_DEPTH {
                    params.extend(current.take());
                }
            }
            Event::Text(text) if path.len() == PARAM_DEPTH => {
                if let Some((_, value)) = current.as_mut() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| Fault::client(format!("Malformed XML: {e}")))?;
                    value.push_str(&unescaped);
                }
            }
            Event::CData(data) if path.len() == PARAM_DEPTH => {
                if let Some((_, value)) = current.as_mut() {
                    let raw = data.into_inner();
                    let text = std::str::from_utf8(&raw)
                        .map_err(|_| Fault::client("Malformed XML: CDATA is not UTF-8"))?;
                    value.push_str(text);
                }
            }
            Event::End(_) => {
                if path.len() == PARAM_DEPTH {
                    params.extend(current.take());
                }
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !path.is_empty() {
        return Err(Fault::client("Malformed XML: unexpected end of document"));
    }

    let operation = operation.ok_or_else(|| Fault::client("SOAP body contains no operation"))?;
    Ok(SoapRequest { operation, params })
}

fn local_name(start: &BytesStart<'_>) -> Result<String, Fault> {
    std::str::from_utf8(start.local_name().as_ref())
        .map(str::to_string)
        .map_err(|_| Fault::client("Malformed XML: element name is not UTF-8"))
}

/// Tracks an element opening at depth `path.len() + 1`.
fn open_element(
    path: &[String],
    name: &str,
    operation: &mut Option<String>,
    current: &mut Option<(String, String)>,
) -> Result<(), Fault> {
    let depth = path.len() + 1;

    if depth == ENVELOPE_DEPTH && name != "Envelope" {
        return Err(Fault::client(format!(
            "Expected a SOAP Envelope, found <{name}>"
        )));
    }

    let in_body = path.get(1).is_some_and(|element| element == "Body");

    if depth == BODY_CHILD_DEPTH && in_body {
        if operation.is_some() {
            return Err(Fault::client("SOAP body must contain exactly one operation"));
        }
        *operation = Some(name.to_string());
    } else if depth == PARAM_DEPTH && in_body {
        *current = Some((name.to_string(), String::new()));
    }

    Ok(())
}

/// Renders a successful operation response.
pub fn write_response(result: &SoapResult) -> Result<String, EnvelopeError> {
    let name = result.operation_name();
    let response_tag = format!("tns:{name}Response");
    let result_tag = format!("tns:{name}Result");

    write_envelope(|writer| {
        start(writer, &response_tag)?;
        start(writer, &result_tag)?;
        match result {
            SoapResult::ConvertCurrency(amount) => text(writer, &format_double(*amount))?,
            SoapResult::GetRates(rates) => {
                for rate in rates {
                    start(writer, "tns:Rate")?;
                    text_element(writer, "tns:currency", rate.currency.as_str())?;
                    text_element(writer, "tns:rate", &format_double(rate.rate))?;
                    end(writer, "tns:Rate")?;
                }
            }
        }
        end(writer, &result_tag)?;
        end(writer, &response_tag)
    })
}

/// Renders a fault envelope.
pub fn write_fault(fault: &Fault) -> Result<String, EnvelopeError> {
    write_envelope(|writer| {
        start(writer, "soap:Fault")?;
        text_element(writer, "faultcode", fault.code.as_qname())?;
        text_element(writer, "faultstring", &fault.message)?;
        end(writer, "soap:Fault")
    })
}

/// `xs:double` lexical form; always carries a decimal point or exponent.
fn format_double(value: f64) -> String {
    format!("{value:?}")
}

fn write_envelope<F>(body: F) -> Result<String, EnvelopeError>
where
    F: FnOnce(&mut Writer<Vec<u8>>) -> Result<(), EnvelopeError>,
{
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("soap:Envelope")
            .with_attributes([("xmlns:soap", SOAP_ENV_NS), ("xmlns:tns", TARGET_NS)]),
    ))?;
    start(&mut writer, "soap:Body")?;
    body(&mut writer)?;
    end(&mut writer, "soap:Body")?;
    end(&mut writer, "soap:Envelope")?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), EnvelopeError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), EnvelopeError> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text(writer: &mut Writer<Vec<u8>>, content: &str) -> Result<(), EnvelopeError> {
    writer.write_event(Event::Text(BytesText::new(content)))?;
    Ok(())
}

fn text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    content: &str,
) -> Result<(), EnvelopeError> {
    start(writer, name)?;
    text(writer, content)?;
    end(writer, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::fault::FaultCode;
    use converto_core::{CurrencyCode, Rate};

    const CONVERT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:cur="currency.soap">
  <soapenv:Header/>
  <soapenv:Body>
    <cur:convert_currency>
      <cur:from_currency>USD</cur:from_currency>
      <cur:to_currency>EUR</cur:to_currency>
      <cur:amount>100</cur:amount>
    </cur:convert_currency>
  </soapenv:Body>
</soapenv:Envelope>"#;

    #[test]
    fn test_parse_request() {
        let request = parse_request(CONVERT).unwrap();
        assert_eq!(request.operation, "convert_currency");
        assert_eq!(request.param("from_currency"), Some("USD"));
        assert_eq!(request.param("to_currency"), Some("EUR"));
        assert_eq!(request.param("amount"), Some("100"));
        assert_eq!(request.param("missing"), None);
    }

    #[test]
    fn test_parse_unprefixed_and_escaped() {
        let xml = r#"<Envelope><Body><get_rates><base_currency>A&amp;B</base_currency></get_rates></Body></Envelope>"#;
        let request = parse_request(xml).unwrap();
        assert_eq!(request.operation, "get_rates");
        assert_eq!(request.param("base_currency"), Some("A&B"));
    }

    #[test]
    fn test_parse_empty_param() {
        let xml = r#"<s:Envelope xmlns:s="x"><s:Body><get_rates><base_currency/></get_rates></s:Body></s:Envelope>"#;
        let request = parse_request(xml).unwrap();
        assert_eq!(request.param("base_currency"), Some(""));
    }

    #[test]
    fn test_parse_rejects_non_envelope() {
        let fault = parse_request("<html><body/></html>").unwrap_err();
        assert_eq!(fault.code, FaultCode::Client);
        assert!(fault.message.contains("Envelope"));
    }

    #[test]
    fn test_parse_rejects_two_operations() {
        let xml = "<Envelope><Body><get_rates/><get_rates/></Body></Envelope>";
        let fault = parse_request(xml).unwrap_err();
        assert!(fault.message.contains("exactly one"));
    }

    #[test]
    fn test_parse_rejects_empty_body() {
        let fault = parse_request("<Envelope><Body/></Envelope>").unwrap_err();
        assert_eq!(fault.message, "SOAP body contains no operation");
    }

    #[test]
    fn test_parse_rejects_broken_xml() {
        let fault = parse_request("<Envelope><Body><get_rates></Body></Envelope>").unwrap_err();
        assert!(fault.message.starts_with("Malformed XML"));
    }

    #[test]
    fn test_write_convert_response() {
        let xml = write_response(&SoapResult::ConvertCurrency(92.0)).unwrap();
        assert!(xml.contains(
            "<tns:convert_currencyResponse><tns:convert_currencyResult>92.0</tns:convert_currencyResult></tns:convert_currencyResponse>"
        ));
        assert!(xml.contains(r#"xmlns:tns="currency.soap""#));
    }

    #[test]
    fn test_write_rates_response() {
        let xml = write_response(&SoapResult::GetRates(vec![
            Rate::new(CurrencyCode::from("USD"), 1.0),
            Rate::new(CurrencyCode::from("JPY"), 163.043),
        ]))
        .unwrap();
        assert!(xml.contains(
            "<tns:Rate><tns:currency>USD</tns:currency><tns:rate>1.0</tns:rate></tns:Rate><tns:Rate><tns:currency>JPY</tns:currency><tns:rate>163.043</tns:rate></tns:Rate>"
        ));
    }

    #[test]
    fn test_write_fault_escapes_message() {
        let xml = write_fault(&Fault::client("bad <input>")).unwrap();
        assert!(xml.contains("<faultcode>soap:Client</faultcode>"));
        assert!(xml.contains("<faultstring>bad &lt;input&gt;</faultstring>"));
    }
}
