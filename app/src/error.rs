use flex_error::{define_error, TraceError};
use tonic::Status;

define_error! {
    Error {
        OutOfOrder
            { call: String, phase: String }
            |e| { format_args!("{} is not allowed in phase {}", e.call, e.phase) },

        HeightMismatch
            { call: String, expected: i64, actual: i64 }
            |e| {
                format_args!("{} for height {} but the current block height is {}",
                    e.call, e.actual, e.expected)
            },

        HeightOverflow
            { call: String, height: i64 }
            |e| { format_args!("{} at height {} leaves no next block height", e.call, e.height) },

        SnapshotHeight
            { height: u64 }
            |e| { format_args!("snapshot height {} is not a valid block height", e.height) },

        InvalidDecimal
            { value: String }
            |e| { format_args!("invalid decimal '{}'", e.value) },

        GenesisDecode
            [ TraceError<serde_json::Error> ]
            |_| { "invalid genesis app state" },

        SnapshotEncode
            [ TraceError<serde_json::Error> ]
            |_| { "failed to encode snapshot" },

        Bind
            { addr: std::net::SocketAddr }
            [ TraceError<std::io::Error> ]
            |e| { format_args!("failed to listen on {}", e.addr) },

        Transport
            [ TraceError<tonic::transport::Error> ]
            |_| { "gRPC transport error" },

        Application
            { reason: String }
            |e| { format_args!("application error: {}", e.reason) },
    }
}

impl From<Error> for Status {
    fn from(e: Error) -> Self {
        match e.detail() {
            ErrorDetail::OutOfOrder(_) => Status::failed_precondition(e.to_string()),
            ErrorDetail::HeightMismatch(_)
            | ErrorDetail::HeightOverflow(_)
            | ErrorDetail::SnapshotHeight(_)
            | ErrorDetail::GenesisDecode(_) => Status::invalid_argument(e.to_string()),
            _ => Status::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::*;

    #[test]
    fn status_codes() {
        struct Test {
            name: &'static str,
            error: Error,
            code: Code,
        }

        let tests = vec![
            Test {
                name: "out of order",
                error: Error::out_of_order("DeliverTx".to_string(), "Genesis".to_string()),
                code: Code::FailedPrecondition,
            },
            Test {
                name: "height mismatch",
                error: Error::height_mismatch("EndBlock".to_string(), 3, 4),
                code: Code::InvalidArgument,
            },
            Test {
                name: "height overflow",
                error: Error::height_overflow("Commit".to_string(), i64::MAX),
                code: Code::InvalidArgument,
            },
            Test {
                name: "genesis decode",
                error: Error::genesis_decode(serde_json::from_str::<u8>("{").unwrap_err()),
                code: Code::InvalidArgument,
            },
            Test {
                name: "application",
                error: Error::application("boom".to_string()),
                code: Code::Internal,
            },
        ];

        for test in tests {
            let status = Status::from(test.error);
            assert_eq!(status.code(), test.code, "{}", test.name);
        }
    }

    #[test]
    fn out_of_order_message_names_call_and_phase() {
        let status = Status::from(Error::out_of_order(
            "Commit".to_string(),
            "Executing { height: 2 }".to_string(),
        ));

        assert!(status.message().contains("Commit"));
        assert!(status.message().contains("Executing"));
    }
}
