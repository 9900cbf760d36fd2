//! Shared fixtures for unit tests.

use crate::parser::LogEntry;

pub const SAMPLE_EARLY_LOG: &str = "91.239.186.133 - - [17/May/2015:14:05:39 +0000] \
     \"GET /downloads/product_2 HTTP/1.1\" 304 1234 \"-\" \"Debian APT-HTTP/1.3 (0.9.7.9)\"";

pub const SAMPLE_LATE_LOG: &str = "91.239.186.133 - - [17/May/2015:15:05:01 +0000] \
     \"GET /downloads/product_2 HTTP/1.1\" 304 777 \"-\" \"Debian APT-HTTP/1.3 (0.9.7.9)\"";

/// Six well-formed lines: exactly four with a Debian user agent and exactly
/// one with status 404.
pub fn sample_lines() -> Vec<String> {
    vec![
        SAMPLE_EARLY_LOG.to_string(),
        SAMPLE_LATE_LOG.to_string(),
        "212.77.185.81 - - [17/May/2015:16:10:02 +0000] \
         \"GET /downloads/product_1 HTTP/1.1\" 200 3301 \"-\" \
         \"Debian APT-HTTP/1.3 (0.8.10.3)\""
            .to_string(),
        "80.91.33.133 - - [17/May/2015:17:25:45 +0000] \
         \"GET /downloads/product_1 HTTP/1.1\" 404 324 \"-\" \
         \"Debian APT-HTTP/1.3 (0.8.16~exp12ubuntu10.16)\""
            .to_string(),
        "173.203.139.108 - - [17/May/2015:18:00:12 +0000] \
         \"HEAD /downloads/product_2 HTTP/1.1\" 200 0 \"-\" \
         \"Wget/1.13.4 (linux-gnu)\""
            .to_string(),
        "5.83.131.103 - - [17/May/2015:19:44:59 +0000] \
         \"GET /downloads/product_1 HTTP/1.1\" 200 85619 \"-\" \
         \"Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36\""
            .to_string(),
    ]
}

fn sample_entry() -> LogEntry {
    LogEntry {
        address: "91.239.186.133".to_string(),
        timestamp: "17/May/2015:14:05:39 +0000".to_string(),
        request: "GET /downloads/product_2 HTTP/1.1".to_string(),
        status: "304".to_string(),
        size: "1234".to_string(),
        referrer: "-".to_string(),
        agent: "Debian APT-HTTP/1.3 (0.9.7.9)".to_string(),
    }
}

pub fn entry_with_status(status: &str) -> LogEntry {
    LogEntry {
        status: status.to_string(),
        ..sample_entry()
    }
}

pub fn entry_with_size(size: &str) -> LogEntry {
    LogEntry {
        size: size.to_string(),
        ..sample_entry()
    }
}

pub fn entry_with_request(request: &str) -> LogEntry {
    LogEntry {
        request: request.to_string(),
        ..sample_entry()
    }
}

pub fn entry_with_referrer(referrer: &str) -> LogEntry {
    LogEntry {
        referrer: referrer.to_string(),
        ..sample_entry()
    }
}

pub fn entry_with_address(address: &str) -> LogEntry {
    LogEntry {
        address: address.to_string(),
        ..sample_entry()
    }
}
