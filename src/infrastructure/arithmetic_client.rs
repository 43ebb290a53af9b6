use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::domain::calculation::{CalcError, CalcOutcome, Calculation};

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Deserialize)]
struct ResultBody {
    #[serde(default)]
    result: Option<Value>,
}

impl From<reqwest::Error> for CalcError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            CalcError::Status(status.as_u16())
        } else if e.is_decode() {
            CalcError::Decode(e.without_url().to_string())
        } else {
            CalcError::Transport(e.without_url().to_string())
        }
    }
}

/// HTTP client for the remote arithmetic service.
///
/// Every calculation is a single `GET {base}/{operation}/{lhs}/{rhs}` whose JSON
/// body carries the answer in a `result` field.
#[derive(Debug, Clone)]
pub struct ArithmeticClient {
    base: Url,
    client: Client,
}

impl ArithmeticClient {
    pub fn new(base_address: &str) -> Result<Self, CalcError> {
        let base = Url::parse(base_address)
            .map_err(|e| CalcError::InvalidAddress(format!("{base_address}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(CalcError::InvalidAddress(base_address.to_string()));
        }
        Ok(Self {
            base,
            client: Client::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve the request address relative to the base, the way a browser
    /// resolves `new URL(resource, base)`.
    pub fn request_url(&self, calculation: &Calculation) -> Result<Url, CalcError> {
        let resource = format!(
            "{}/{}/{}",
            calculation.operation.path_name(),
            utf8_percent_encode(&calculation.lhs, SEGMENT),
            utf8_percent_encode(&calculation.rhs, SEGMENT),
        );
        self.base
            .join(&resource)
            .map_err(|e| CalcError::InvalidAddress(format!("{resource}: {e}")))
    }

    pub async fn calculate(&self, calculation: &Calculation) -> CalcOutcome {
        let url = self.request_url(calculation)?;
        log::debug!("GET {url}");

        let body: ResultBody = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match body.result {
            Some(Value::String(result)) => Ok(result),
            Some(Value::Null) | None => Err(CalcError::MissingResult),
            Some(other) => Ok(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::operation::Operation;

    #[rstest]
    #[case("http://127.0.0.1:8080", "http://127.0.0.1:8080/add/7/3")]
    #[case("http://127.0.0.1:8080/", "http://127.0.0.1:8080/add/7/3")]
    #[case("http://calc.local/api/", "http://calc.local/api/add/7/3")]
    #[case("http://calc.local/api", "http://calc.local/add/7/3")]
    fn test_request_url_resolution(
        #[case] base: &str,
        #[case] expected: &str,
    ) -> color_eyre::Result<()> {
        let client = ArithmeticClient::new(base)?;
        let url = client.request_url(&Calculation::new(Operation::Add, "7", "3"))?;
        assert_eq!(url.as_str(), expected);
        Ok(())
    }

    #[test]
    fn test_operands_are_sent_as_typed() -> color_eyre::Result<()> {
        let client = ArithmeticClient::new("http://localhost:8080")?;
        let url = client.request_url(&Calculation::new(Operation::Divide, "-1.5", "2e3"))?;
        assert_eq!(url.path(), "/divide/-1.5/2e3");
        Ok(())
    }

    #[test]
    fn test_reserved_characters_are_escaped() -> color_eyre::Result<()> {
        let client = ArithmeticClient::new("http://localhost:8080")?;
        let url = client.request_url(&Calculation::new(Operation::Subtract, "1/2", "3?"))?;
        assert_eq!(url.path(), "/subtract/1%2F2/3%3F");
        assert_eq!(url.query(), None);
        Ok(())
    }

    #[rstest]
    #[case("not a url")]
    #[case("mailto:calc@example.com")]
    fn test_invalid_base_address(#[case] base: &str) {
        assert!(matches!(
            ArithmeticClient::new(base),
            Err(CalcError::InvalidAddress(_))
        ));
    }
}
