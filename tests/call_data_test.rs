use governance_dao::action::CallAction;
use multiversx_sc_scenario::imports::*;

fn decode(call_data: &[u8]) -> Option<CallAction<StaticApi>> {
    CallAction::decode(&ManagedBuffer::new_from_bytes(call_data))
}

#[test]
fn test_decode_endpoint_without_arguments() {
    let action = decode(b"addProposer").expect("valid call data");

    assert_eq!(action.endpoint, ManagedBuffer::from("addProposer"));
    assert_eq!(action.arguments.len(), 0);
}

#[test]
fn test_decode_hex_arguments() {
    let action = decode(b"transfer@0A0b@ff@").expect("valid call data");

    assert_eq!(action.endpoint, ManagedBuffer::from("transfer"));
    assert_eq!(action.arguments.len(), 3);
    assert_eq!(action.arguments.get(0).to_boxed_bytes().as_slice(), &[0x0a, 0x0b]);
    assert_eq!(action.arguments.get(1).to_boxed_bytes().as_slice(), &[0xff]);
    assert!(action.arguments.get(2).is_empty());
}

#[test]
fn test_decode_rejects_malformed_input() {
    assert!(decode(b"").is_none());
    assert!(decode(b"@01").is_none());
    assert!(decode(b"transfer@abc").is_none());
    assert!(decode(b"transfer@zz").is_none());
}

#[test]
fn test_decode_long_call_data() {
    let arguments: Vec<String> = (0u16..300).map(|i| format!("{i:04x}")).collect();
    let call_data = format!("transfer@{}", arguments.join("@"));
    let action = decode(call_data.as_bytes()).expect("valid call data");

    assert_eq!(action.endpoint, ManagedBuffer::from("transfer"));
    assert_eq!(action.arguments.len(), 300);
    assert_eq!(action.arguments.get(0).to_boxed_bytes().as_slice(), &[0x00, 0x00]);
    assert_eq!(action.arguments.get(299).to_boxed_bytes().as_slice(), &[0x01, 0x2b]);
}

#[test]
fn test_decode_large_argument() {
    let call_data = format!("store@{}", "ab".repeat(10_000));
    let action = decode(call_data.as_bytes()).expect("valid call data");

    assert_eq!(action.arguments.len(), 1);
    assert_eq!(action.arguments.get(0).to_boxed_bytes().as_slice(), vec![0xab; 10_000].as_slice());
}
