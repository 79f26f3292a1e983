//! Loopback HTTP server answering a fixed script of replies.

use std::io::Read;
use std::thread::JoinHandle;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

pub struct Loopback {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl Loopback {
    /// Wait for the script to finish and return what was received.
    pub fn finish(self) -> Vec<Recorded> {
        self.handle.join().expect("loopback thread panicked")
    }
}

/// Serve one `(status, body)` reply per incoming request, in order.
pub fn serve(replies: Vec<(u16, &'static str)>) -> Loopback {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind loopback");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("loopback port");

    let handle = std::thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in replies {
            let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(5)) else {
                break;
            };
            let mut received = String::new();
            let _ = request.as_reader().read_to_string(&mut received);
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            seen.push(Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                authorization,
                body: received,
            });

            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
        seen
    });

    Loopback {
        base_url: format!("http://127.0.0.1:{port}/api"),
        handle,
    }
}

/// A base URL nothing is listening on.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}
