use common::MarketError;
use common::models::Symbol;
use serde::Deserialize;

/// Binance code for "Invalid symbol."
pub const INVALID_SYMBOL_CODE: i64 = -1121;

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub code: i64,
    pub msg: String,
}

/// Maps a non-success upstream reply onto the error taxonomy.
pub fn upstream_error(status: u16, body: &str, symbol: Option<&Symbol>) -> MarketError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { code, msg }) if code == INVALID_SYMBOL_CODE => {
            let name = symbol.map(Symbol::as_str).unwrap_or("<none>");
            MarketError::UnknownSymbol(format!("{}: {}", name, msg))
        }
        Ok(ErrorResponse { code, msg }) => MarketError::UpstreamRejected {
            status,
            code,
            message: msg,
        },
        Err(_) => MarketError::UpstreamRejected {
            status,
            code: 0,
            message: body.trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_symbol_code_becomes_unknown_symbol() {
        let symbol = Symbol::parse("nopeusdt").unwrap();
        let err = upstream_error(400, r#"{"code":-1121,"msg":"Invalid symbol."}"#, Some(&symbol));
        assert_eq!(
            err,
            MarketError::UnknownSymbol("NOPEUSDT: Invalid symbol.".into())
        );
    }

    #[test]
    fn other_codes_are_rejections() {
        let err = upstream_error(400, r#"{"code":-1100,"msg":"Illegal characters"}"#, None);
        assert_eq!(
            err,
            MarketError::UpstreamRejected {
                status: 400,
                code: -1100,
                message: "Illegal characters".into(),
            }
        );
    }

    #[test]
    fn non_json_body_is_kept_verbatim() {
        let err = upstream_error(502, "Bad Gateway\n", None);
        assert_eq!(
            err,
            MarketError::UpstreamRejected {
                status: 502,
                code: 0,
                message: "Bad Gateway".into(),
            }
        );
    }
}
