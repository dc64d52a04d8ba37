use poem::{
    http::{header, HeaderValue},
    Body, Request,
};

/// Treats a request without a body as an empty JSON object, and a body sent
/// without `Content-Type` as JSON, so every endpoint sees `{}` instead of a
/// payload error when the client omits the body.
pub async fn default_json_body(mut req: Request) -> poem::Result<Request> {
    let body = req.take_body().into_bytes().await?;
    if body.iter().all(|x| x.is_ascii_whitespace()) {
        req.set_body(Body::from("{}"));
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        return Ok(req);
    }
    if req.content_type().is_none() {
        req.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }
    req.set_body(Body::from(body));
    Ok(req)
}

#[cfg(test)]
mod tests {
    use poem::Request;

    use super::default_json_body;

    #[tokio::test]
    async fn test_empty_body_becomes_empty_object() -> anyhow::Result<()> {
        let req = Request::builder().finish();
        let mut req = default_json_body(req).await?;
        assert_eq!(req.content_type(), Some("application/json"));
        assert_eq!(req.take_body().into_string().await?, "{}");
        Ok(())
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_json() -> anyhow::Result<()> {
        let req = Request::builder().body(r#"{"user_id":"a"}"#);
        let mut req = default_json_body(req).await?;
        assert_eq!(req.content_type(), Some("application/json"));
        assert_eq!(req.take_body().into_string().await?, r#"{"user_id":"a"}"#);
        Ok(())
    }

    #[tokio::test]
    async fn test_content_type_kept() -> anyhow::Result<()> {
        let req = Request::builder()
            .content_type("text/plain")
            .body("hello");
        let req = default_json_body(req).await?;
        assert_eq!(req.content_type(), Some("text/plain"));
        Ok(())
    }
}
