//! Per-connection handler: read one request head, route it, write the
//! response and close.

use std::net::SocketAddr;

use http::{header, Method, Response};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

use crate::error::RequestError;
use crate::routes;

pub const MAX_HEAD_BYTES: usize = 8 * 1024;

#[derive(Debug)]
pub struct RequestHead {
    pub method: Method,
    pub path: String,
    /// Raw query string after the first `?`, still percent-encoded.
    pub query: Option<String>,
}

/// Read the request line and skip headers up to the blank line. The head is
/// handled as bytes; header contents are never inspected.
pub async fn read_head<R>(reader: &mut R) -> Result<RequestHead, RequestError>
where
    R: AsyncBufRead + Unpin,
{
    let mut total = 0usize;
    let mut line = Vec::new();
    let n = reader.read_until(b'\n', &mut line).await?;
    if n == 0 {
        return Err(RequestError::Closed);
    }
    total += n;
    let request_line = String::from_utf8_lossy(&line).trim_end().to_string();

    loop {
        if total > MAX_HEAD_BYTES {
            return Err(RequestError::TooLarge(MAX_HEAD_BYTES));
        }
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        total += n;
        if n == 0 || line == b"\r\n" || line == b"\n" {
            break;
        }
    }
    if total > MAX_HEAD_BYTES {
        return Err(RequestError::TooLarge(MAX_HEAD_BYTES));
    }
    parse_request_line(&request_line)
}

/// Split `METHOD target HTTP/1.x`. The target is split on the first `?` and
/// otherwise kept as sent.
pub fn parse_request_line(line: &str) -> Result<RequestHead, RequestError> {
    let mut parts = line.split_whitespace();
    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(RequestError::Malformed(format!("bad request line {line:?}")));
    };
    if !version.starts_with("HTTP/1.") {
        return Err(RequestError::Malformed(format!("unsupported version {version}")));
    }
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|e| RequestError::Malformed(e.to_string()))?;
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query.to_owned())),
        None => (target, None),
    };
    if path.is_empty() {
        return Err(RequestError::Malformed(format!("bad request target {target:?}")));
    }
    Ok(RequestHead {
        method,
        path: path.to_owned(),
        query,
    })
}

/// Serialize an HTTP/1.1 response. HEAD responses keep their headers but drop
/// the body.
pub fn encode_response(res: &Response<Vec<u8>>, head_only: bool) -> Vec<u8> {
    let status = res.status();
    let mut out = format!(
        "HTTP/1.1 {} {}\r\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or("")
    )
    .into_bytes();
    for (name, value) in res.headers() {
        if *name == header::CONTENT_LENGTH || *name == header::CONNECTION {
            continue;
        }
        out.extend_from_slice(name.as_str().as_bytes());
        out.extend_from_slice(b": ");
        out.extend_from_slice(value.as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out.extend_from_slice(format!("Content-Length: {}\r\n", res.body().len()).as_bytes());
    out.extend_from_slice(b"Connection: close\r\n\r\n");
    if !head_only {
        out.extend_from_slice(res.body());
    }
    out
}

/// Handle a single connection end to end.
pub async fn handle_connection<S>(stream: S, addr: SocketAddr)
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    // one byte past the limit so oversized heads are detected, not truncated
    let mut reader = BufReader::new(stream).take(MAX_HEAD_BYTES as u64 + 1);
    let (response, head_only) = match read_head(&mut reader).await {
        Ok(head) => {
            let res = routes::handle(&head.method, &head.path, head.query.as_deref());
            log::debug!(
                "{addr} {} {} -> {}",
                head.method,
                head.path,
                res.status().as_u16()
            );
            (res, head.method == Method::HEAD)
        }
        Err(RequestError::Closed) => {
            log::trace!("{addr} closed without a request");
            return;
        }
        Err(RequestError::Io(e)) => {
            log::debug!("{addr} read error: {e}");
            return;
        }
        Err(e) => {
            log::warn!("{addr} {e}");
            (routes::bad_request(&e.to_string()), false)
        }
    };

    let bytes = encode_response(&response, head_only);
    let stream = reader.get_mut().get_mut();
    if let Err(e) = stream.write_all(&bytes).await {
        log::debug!("{addr} write error: {e}");
        return;
    }
    let _ = stream.shutdown().await;
}
