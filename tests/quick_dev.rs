use anyhow::Result;
use serde_json::json;

#[tokio::test]
#[ignore = "needs a running server on :8080"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080/api")?;

    hc.do_get("/posts/home").await?.print().await?;

    hc.do_get("/categories/technology").await?.print().await?;

    hc.do_post(
        "/admin/posts",
        json!({
          "title": "Hello World",
          "content": "A first post published over the wire.",
          "category": "Technology",
          "tags": ["Hello", "Rust"],
        }),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/posts/hello-world").await?.print().await?;

    hc.do_get("/admin/posts").await?.print().await?;

    // hc.do_post("/admin/generate", json!({ "topic": "spatial computing" }))
    //     .await?
    //     .print()
    //     .await?;

    // hc.do_post(
    //     "/admin/analyze-seo",
    //     json!({ "title": "Hello World", "content": "A first post." }),
    // )
    // .await?
    // .print()
    // .await?;

    Ok(())
}
