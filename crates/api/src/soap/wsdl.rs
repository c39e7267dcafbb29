//! WSDL 1.1 description of the SOAP service.

use quick_xml::escape::escape;

use super::envelope::TARGET_NS;

/// Renders the WSDL with `location` as the service address.
#[must_use]
pub fn document(location: &str) -> String {
    let location = escape(location);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<wsdl:definitions xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
    xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
    xmlns:xs="http://www.w3.org/2001/XMLSchema"
    xmlns:tns="{TARGET_NS}"
    targetNamespace="{TARGET_NS}"
    name="Application">
  <wsdl:types>
    <xs:schema targetNamespace="{TARGET_NS}" elementFormDefault="qualified">
      <xs:complexType name="Rate">
        <xs:sequence>
          <xs:element name="currency" type="xs:string" minOccurs="0" nillable="true"/>
          <xs:element name="rate" type="xs:double" minOccurs="0" nillable="true"/>
        </xs:sequence>
      </xs:complexType>
      <xs:complexType name="RateArray">
        <xs:sequence>
          <xs:element name="Rate" type="tns:Rate" minOccurs="0" maxOccurs="unbounded" nillable="true"/>
        </xs:sequence>
      </xs:complexType>
      <xs:element name="convert_currency">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="from_currency" type="xs:string"/>
            <xs:element name="to_currency" type="xs:string"/>
            <xs:element name="amount" type="xs:double"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="convert_currencyResponse">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="convert_currencyResult" type="xs:double"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="get_rates">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="base_currency" type="xs:string"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
      <xs:element name="get_ratesResponse">
        <xs:complexType>
          <xs:sequence>
            <xs:element name="get_ratesResult" type="tns:RateArray"/>
          </xs:sequence>
        </xs:complexType>
      </xs:element>
    </xs:schema>
  </wsdl:types>
  <wsdl:message name="convert_currency">
    <wsdl:part name="convert_currency" element="tns:convert_currency"/>
  </wsdl:message>
  <wsdl:message name="convert_currencyResponse">
    <wsdl:part name="convert_currencyResponse" element="tns:convert_currencyResponse"/>
  </wsdl:message>
  <wsdl:message name="get_rates">
    <wsdl:part name="get_rates" element="tns:get_rates"/>
  </wsdl:message>
  <wsdl:message name="get_ratesResponse">
    <wsdl:part name="get_ratesResponse" element="tns:get_ratesResponse"/>
  </wsdl:message>
  <wsdl:portType name="CurrencyService">
    <wsdl:operation name="convert_currency">
      <wsdl:input message="tns:convert_currency"/>
      <wsdl:output message="tns:convert_currencyResponse"/>
    </wsdl:operation>
    <wsdl:operation name="get_rates">
      <wsdl:input message="tns:get_rates"/>
      <wsdl:output message="tns:get_ratesResponse"/>
    </wsdl:operation>
  </wsdl:portType>
  <wsdl:binding name="CurrencyService" type="tns:CurrencyService">
    <soap:binding style="document" transport="http://schemas.xmlsoap.org/soap/http"/>
    <wsdl:operation name="convert_currency">
      <soap:operation soapAction="convert_currency" style="document"/>
      <wsdl:input><soap:body use="literal"/></wsdl:input>
      <wsdl:output><soap:body use="literal"/></wsdl:output>
    </wsdl:operation>
    <wsdl:operation name="get_rates">
      <soap:operation soapAction="get_rates" style="document"/>
      <wsdl:input><soap:body use="literal"/></wsdl:input>
      <wsdl:output><soap:body use="literal"/></wsdl:output>
    </wsdl:operation>
  </wsdl:binding>
  <wsdl:service name="CurrencyService">
    <wsdl:port name="CurrencyService" binding="tns:CurrencyService">
      <soap:address location="{location}"/>
    </wsdl:port>
  </wsdl:service>
</wsdl:definitions>
"#
    )
}
