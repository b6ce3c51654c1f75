#[cfg(test)]
mod tests {
    use super::super::mint_service::*;
    use crate::mint_view::ui::events::Message;
    use crate::wallet::mock::{MockWallet, other_account, test_account, test_contract};
    use crate::wallet::{ChainId, NetworkEvent, TxHash, WalletError, WalletProvider, abi};
    use alloy_primitives::U256;
    use std::sync::{Arc, Mutex};

    fn create_service(wallet: &Arc<MockWallet>) -> MintService {
        let provider: Arc<dyn WalletProvider> = wallet.clone();
        MintService::new(Some(provider), test_contract())
    }

    fn collecting_sink() -> (MessageSink, Arc<Mutex<Vec<Message>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let store = received.clone();
        let sink: MessageSink = Arc::new(move |message: Message| {
            store.lock().unwrap().push(message);
        });
        (sink, received)
    }

    fn run_mint(service: &MintService) -> Vec<Message> {
        let messages = Mutex::new(Vec::new());
        service.request_mint(test_account(), &|message: Message| {
            messages.lock().unwrap().push(message);
        });
        messages.into_inner().unwrap()
    }

    #[test]
    fn test_without_provider() {
        let service = MintService::new(None, test_contract());

        assert!(!service.has_provider());
        assert!(service.check_existing_connection().is_none());
        assert!(service.refresh_supply_counters().is_none());
        assert!(matches!(
            service.connect(),
            Message::ConnectFailed(WalletError::ProviderAbsent)
        ));

        let (sink, _) = collecting_sink();
        assert_eq!(
            service.subscribe_to_mint_events(sink.clone()).unwrap_err(),
            WalletError::ProviderAbsent
        );
        assert_eq!(
            service.subscribe_to_network_changes(sink).unwrap_err(),
            WalletError::ProviderAbsent
        );

        let messages = run_mint(&service);
        assert!(matches!(
            messages.as_slice(),
            [Message::MintFailed(WalletError::ProviderAbsent)]
        ));
    }

    #[test]
    fn test_check_existing_connection_does_not_prompt() {
        let wallet = MockWallet::new().with_authorized(vec![test_account()]).into_arc();
        let service = create_service(&wallet);

        let message = service.check_existing_connection();

        assert!(matches!(message, Some(Message::ExistingAccounts(a)) if a == vec![test_account()]));
        assert_eq!(wallet.counts().accounts, 1);
        assert_eq!(wallet.counts().request_accounts, 0);
    }

    #[test]
    fn test_check_existing_connection_with_no_accounts() {
        let wallet = MockWallet::new().into_arc();
        let service = create_service(&wallet);

        assert!(matches!(
            service.check_existing_connection(),
            Some(Message::ExistingAccounts(a)) if a.is_empty()
        ));
    }

    #[test]
    fn test_connect_prompts_for_accounts() {
        let wallet = MockWallet::new()
            .with_grant(Ok(vec![test_account(), other_account()]))
            .into_arc();
        let service = create_service(&wallet);

        let message = service.connect();

        assert!(matches!(message, Message::AccountsGranted(a) if a[0] == test_account()));
        assert_eq!(wallet.counts().request_accounts, 1);
    }

    #[test]
    fn test_connect_rejected() {
        let wallet = MockWallet::new()
            .with_grant(Err(WalletError::UserRejected))
            .into_arc();
        let service = create_service(&wallet);

        assert!(matches!(
            service.connect(),
            Message::ConnectFailed(WalletError::UserRejected)
        ));
    }

    #[test]
    fn test_refresh_supply_counters_reads_both() {
        let wallet = MockWallet::new().with_supply(7, 50).into_arc();
        let service = create_service(&wallet);

        let message = service.refresh_supply_counters();

        match message {
            Some(Message::SupplyLoaded { minted, total }) => {
                assert_eq!(minted, U256::from(7u64));
                assert_eq!(total, U256::from(50u64));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(wallet.counts().reads, 2);
    }

    #[test]
    fn test_refresh_supply_counters_fails_as_a_pair() {
        let wallet = MockWallet::new()
            .with_total_supply_error(WalletError::Transport("down".to_string()))
            .into_arc();
        let service = create_service(&wallet);

        assert!(matches!(
            service.refresh_supply_counters(),
            Some(Message::SupplyFailed(WalletError::Transport(_)))
        ));
    }

    #[test]
    fn test_request_mint_success() {
        let wallet = MockWallet::new().into_arc();
        let service = create_service(&wallet);

        let messages = run_mint(&service);

        assert_eq!(messages.len(), 2);
        assert!(matches!(&messages[0], Message::MintSubmitted(hash) if hash.as_str() == "0xabc"));
        assert!(matches!(&messages[1], Message::MintConfirmed { hash, .. } if hash.as_str() == "0xabc"));

        let (from, to, data) = wallet.last_send().unwrap();
        assert_eq!(from, test_account());
        assert_eq!(to, test_contract());
        assert_eq!(data, abi::encode_call(abi::MINT_SIGNATURE));
        assert_eq!(wallet.counts().receipts, 1);
    }

    #[test]
    fn test_request_mint_rejected_before_submission() {
        let wallet = MockWallet::new()
            .with_send_result(Err(WalletError::UserRejected))
            .into_arc();
        let service = create_service(&wallet);

        let messages = run_mint(&service);

        assert!(matches!(
            messages.as_slice(),
            [Message::MintFailed(WalletError::UserRejected)]
        ));
        assert_eq!(wallet.counts().receipts, 0);
    }

    #[test]
    fn test_request_mint_reverted() {
        let wallet = MockWallet::new().with_receipt(Ok(false)).into_arc();
        let service = create_service(&wallet);

        let messages = run_mint(&service);

        assert!(matches!(&messages[0], Message::MintSubmitted(_)));
        match &messages[1] {
            Message::MintFailed(WalletError::TransactionFailure(reason)) => {
                assert!(reason.contains("0xabc"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_request_mint_receipt_error() {
        let wallet = MockWallet::new()
            .with_receipt(Err(WalletError::Transport("gone".to_string())))
            .with_send_result(Ok(TxHash::new("0xdef")))
            .into_arc();
        let service = create_service(&wallet);

        let messages = run_mint(&service);

        assert_eq!(messages.len(), 2);
        assert!(matches!(
            &messages[1],
            Message::MintFailed(WalletError::Transport(_))
        ));
    }

    #[test]
    fn test_mint_events_become_messages() {
        let wallet = MockWallet::new().into_arc();
        let service = create_service(&wallet);
        let (sink, received) = collecting_sink();

        let subscription = service.subscribe_to_mint_events(sink).unwrap();
        wallet.emit_minted(test_contract(), test_account(), 42);
        // Other contracts are not ours
        wallet.emit_minted(other_account(), test_account(), 43);

        {
            let received = received.lock().unwrap();
            assert_eq!(received.len(), 1);
            assert!(matches!(
                &received[0],
                Message::MintCompleted { sender, token_id }
                    if *sender == test_account() && *token_id == U256::from(42u64)
            ));
        }

        drop(subscription);
        assert_eq!(wallet.active_log_watchers(), 0);
        wallet.emit_minted(test_contract(), test_account(), 44);
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_network_events_become_messages() {
        let wallet = MockWallet::new().into_arc();
        let service = create_service(&wallet);
        let (sink, received) = collecting_sink();

        let _subscription = service.subscribe_to_network_changes(sink).unwrap();
        wallet.emit_network(NetworkEvent::ChainChanged {
            new: ChainId(1),
            old: None,
        });
        wallet.emit_network(NetworkEvent::AccountsChanged(vec![other_account()]));

        let received = received.lock().unwrap();
        assert!(matches!(
            &received[0],
            Message::NetworkChanged { new: ChainId(1), old: None }
        ));
        assert!(matches!(
            &received[1],
            Message::AccountsChanged(accounts) if accounts == &vec![other_account()]
        ));
        assert_eq!(wallet.active_network_watchers(), 1);
    }
}
