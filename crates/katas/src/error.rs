#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to bind to {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_message() {
        let err = Error::Bind {
            addr: "127.0.0.1:3000".to_string(),
            reason: "address in use".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to bind to 127.0.0.1:3000: address in use"
        );
    }

    #[test]
    fn test_converts_into_report() {
        let report: color_eyre::eyre::Report = Error::Server("closed".to_string()).into();
        assert_eq!(report.to_string(), "Server error: closed");
    }
}
