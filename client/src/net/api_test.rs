use super::*;

#[test]
fn network_error_keeps_message() {
    assert_eq!(
        network_error("TypeError: Failed to fetch"),
        TransportError::Network("TypeError: Failed to fetch".to_owned())
    );
}

#[test]
fn unavailable_is_a_transport_failure_without_status() {
    let err = gate::ApiError::from(unavailable());
    assert_eq!(err.status(), None);
    assert!(!err.is_unauthorized());
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_send_fails_without_network() {
    let request = gate::RequestBuilder::get("/admin/dashboard/").build().unwrap();
    let err = futures::executor::block_on(FetchTransport.send(request)).unwrap_err();
    assert_eq!(err, unavailable());
}
