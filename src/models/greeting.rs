use crate::response::utc_timestamp;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};

/// Substituted whenever a request carries no usable `name`.
pub const DEFAULT_NAME: &str = "World";

const NAME_FIELD: &str = "name";

/// Greeting input, read from the query string on `GET /hello` and from the
/// JSON body on `POST /api/v1/hello`.
///
/// The JSON key is matched case-insensitively (`name`, `Name`, `NAME`); when
/// it appears more than once the last non-null value wins. A `null` value
/// leaves the name unset. Unknown fields are ignored. The name is not
/// validated or escaped.
#[derive(Serialize, Debug, Default, PartialEq, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GreetingRequest {
    pub name: Option<String>,
}

impl GreetingRequest {
    /// Builds a request from decoded query pairs. Only the first `name`
    /// pair counts, even if it is empty.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            name: pairs
                .into_iter()
                .find(|(key, _)| key == NAME_FIELD)
                .map(|(_, value)| value),
        }
    }

    /// The requested name, or [`DEFAULT_NAME`] when absent or empty.
    pub fn name_or_default(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_NAME,
        }
    }
}

impl<'de> Deserialize<'de> for GreetingRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GreetingVisitor;

        impl<'de> Visitor<'de> for GreetingVisitor {
            type Value = GreetingRequest;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with an optional string `name`")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut request = GreetingRequest::default();
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case(NAME_FIELD) {
                        if let Some(name) = map.next_value::<Option<String>>()? {
                            request.name = Some(name);
                        }
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(request)
            }
        }

        deserializer.deserialize_map(GreetingVisitor)
    }
}

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub greeting: String,
    pub timestamp: String,
}

impl GreetingResponse {
    /// Greeting served by the query-string endpoint.
    pub fn welcome(name: &str) -> Self {
        Self::stamped(format!("Welcome, {name}! This is the hello endpoint."))
    }

    /// Greeting served by the JSON-body endpoint.
    pub fn hello(name: &str) -> Self {
        Self::stamped(format!("Hello, {name}!"))
    }

    fn stamped(greeting: String) -> Self {
        Self {
            greeting,
            timestamp: utc_timestamp(),
        }
    }
}
