// mebel-client/tests/admin_session.rs
// Login, restore and logout through AdminClient

mod support;

use mebel_client::{AdminClient, ClientError, CredentialStorage, ErrorCode, HttpClient};
use shared::NavSection;
use support::{FakeApi, TOKEN};
use tempfile::TempDir;

#[tokio::test]
async fn test_login_stores_session() {
    let dir = TempDir::new().unwrap();
    let api = FakeApi::new();
    let admin = AdminClient::new(api.client()).with_storage(CredentialStorage::in_dir(dir.path()));
    assert!(!admin.is_logged_in());

    let session = admin.login("  admin ", "rahasia").await.unwrap();
    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.username, "admin");
    assert!(session.is_admin());
    assert_eq!(session.visible_sections(), NavSection::ALL.to_vec());

    assert_eq!(admin.http().token().as_deref(), Some(TOKEN));
    assert!(dir.path().join("session.json").exists());

    // bearer token reaches the server
    let me = admin.me().await.unwrap();
    assert_eq!(me.name, "Admin Toko");
}

#[tokio::test]
async fn test_bad_password() {
    let api = FakeApi::new();
    let admin = AdminClient::new(api.client());

    let err = admin.login("admin", "salah").await.unwrap_err();
    assert_eq!(err.error_code(), Some(ErrorCode::InvalidCredentials));
    assert!(err.is_unauthorized());
    assert!(!admin.is_logged_in());
    assert!(admin.http().token().is_none());
}

#[tokio::test]
async fn test_empty_credentials_send_nothing() {
    let api = FakeApi::new();
    let admin = AdminClient::new(api.client());

    assert!(admin.login(" ", "rahasia").await.is_err());
    assert!(admin.login("admin", "").await.is_err());
    assert_eq!(api.hits("POST /auth/login"), 0);
}

#[tokio::test]
async fn test_restore_and_logout() {
    let dir = TempDir::new().unwrap();
    let api = FakeApi::new();

    let first = AdminClient::new(api.client()).with_storage(CredentialStorage::in_dir(dir.path()));
    first.login("admin", "rahasia").await.unwrap();

    // a fresh client picks the stored session up
    let second = AdminClient::new(api.client()).with_storage(CredentialStorage::in_dir(dir.path()));
    let restored = second.restore().unwrap();
    assert_eq!(restored.token, TOKEN);
    assert!(second.is_logged_in());
    assert!(second.me().await.is_ok());

    second.logout().unwrap();
    assert!(!second.is_logged_in());
    assert!(second.http().token().is_none());
    assert!(!dir.path().join("session.json").exists());

    let err = second.me().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_unsaved_login_installs_nothing() {
    let dir = TempDir::new().unwrap();
    // a regular file where the storage directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"").unwrap();

    let api = FakeApi::new();
    let admin = AdminClient::new(api.client()).with_storage(CredentialStorage::in_dir(&blocker));

    let err = admin.login("admin", "rahasia").await.unwrap_err();
    assert!(matches!(err, ClientError::Storage(_)));
    assert!(!admin.is_logged_in());
    assert!(admin.http().token().is_none());
    assert!(admin.me().await.unwrap_err().is_unauthorized());
}
