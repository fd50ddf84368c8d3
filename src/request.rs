/*!
Minimal request and response types for the address pages.

Routing and sessions belong to the host application, which builds a
[`Request`] from whatever server framework it uses and writes the returned
[`Response`] back out.
*/
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, CONTENT_TYPE, LOCATION};
use reqwest::{Method, StatusCode};
use url::{form_urlencoded, Url};

lazy_static! {
    static ref BASE: Url = Url::parse("http://localhost/").unwrap();
}

/// An incoming page request: method, query string and posted form values.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
}

impl Request {
    /// A GET for `target`, a path with optional query string such as
    /// `/?id=123&action=manual`.
    pub fn get(target: &str) -> Self {
        Self {
            method: Method::GET,
            query: parse_query(target),
            form: Vec::new(),
        }
    }

    /// A POST for `target`. The body is only read when `content_type` is
    /// `application/x-www-form-urlencoded`.
    pub fn post(target: &str, content_type: &str, body: &[u8]) -> Self {
        let form = if is_form_urlencoded(content_type) {
            form_urlencoded::parse(body).into_owned().collect()
        } else {
            Vec::new()
        };

        Self {
            method: Method::POST,
            query: parse_query(target),
            form,
        }
    }

    /// Convenience constructor for a url-encoded POST built from pairs.
    pub fn post_form<'a, I>(target: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();

        Self::post(
            target,
            mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
            body.as_bytes(),
        )
    }

    pub fn is_post(&self) -> bool {
        self.method == Method::POST
    }

    /// First posted value for `name`, trimmed. Blank when missing.
    pub fn post_form_value(&self, name: &str) -> String {
        first(&self.form, name).trim().to_string()
    }

    /// First query value for `name`. Blank when missing.
    pub fn query_value(&self, name: &str) -> &str {
        first(&self.query, name)
    }

    /// Posted value for `name`, falling back to the query string.
    pub fn form_value(&self, name: &str) -> &str {
        self.form
            .iter()
            .chain(self.query.iter())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or_default()
    }
}

fn first<'a>(pairs: &'a [(String, String)], name: &str) -> &'a str {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default()
}

fn parse_query(target: &str) -> Vec<(String, String)> {
    match BASE.join(target) {
        Ok(url) => url.query_pairs().into_owned().collect(),
        Err(_) => Vec::new(),
    }
}

fn is_form_urlencoded(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|m| m.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str())
        .unwrap_or(false)
}

/// What a handler wants written back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl Response {
    /// A 200 carrying rendered HTML.
    pub fn html(body: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        Self {
            status: StatusCode::OK,
            headers,
            body,
        }
    }

    /// A 302 to `location`. Fails when `location` cannot be sent as a
    /// header value.
    pub fn redirect(location: &str) -> Result<Self, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        headers.insert(LOCATION, HeaderValue::from_str(location)?);
        Ok(Self {
            status: StatusCode::FOUND,
            headers,
            body: String::new(),
        })
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}
