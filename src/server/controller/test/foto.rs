use crate::server::report::document::tests::png;

use super::*;

const BOUNDARY: &str = "vistoria-boundary";

/// Builds a multipart body with one file part per `(file_name, mimetype, bytes)`.
fn multipart(uri: &str, files: &[(&str, &str, &[u8])]) -> Request<Body> {
    let mut body = Vec::new();
    for (file_name, mimetype, data) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"fotos\"; filename=\"{file_name}\"\r\nContent-Type: {mimetype}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Tests uploading a photo to an inspection and downloading it back.
///
/// Expected: 201 on upload, then the stored bytes with their content type
#[tokio::test]
async fn upload_then_download() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, vistoria, _) = factory::helpers::create_vistoria_with_dependencies(db)
        .await
        .unwrap();
    let image = png(8, 8);

    let (status, body) = send_json(
        app(db),
        multipart(
            &format!("/Vistoria/{}/fotos", vistoria.id),
            &[("sala.png", "image/png", image.as_slice())],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mensagem"], "Fotos enviadas com sucesso.");
    let id = body["fotos"][0]["id"].as_str().unwrap().to_string();

    let (status, headers, bytes) = send(app(db), get(&format!("/fotos/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(bytes, image);
}

/// Tests uploading a file that is not an image.
///
/// Expected: 422 and nothing stored
#[tokio::test]
async fn upload_rejects_unsupported_type() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, vistoria, _) = factory::helpers::create_vistoria_with_dependencies(db)
        .await
        .unwrap();
    let uri = format!("/Vistoria/{}/fotos", vistoria.id);

    let (status, _) = send_json(
        app(db),
        multipart(&uri, &[("notas.txt", "text/plain", b"texto".as_slice())]),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, listed) = send_json(app(db), get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

/// Tests downloading an unknown photo.
///
/// Expected: 404
#[tokio::test]
async fn get_unknown_foto() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _, _) = send(app(db), get("/fotos/Foto999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
