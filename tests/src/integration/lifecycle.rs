//! # Application Lifecycle Flows
//!
//! Drives codec, processor, post store and merkle store together through
//! the host-facing `ApplicationApi`:
//!
//! 1. **Account then post**: the committed hash moves only on `append_tx`
//! 2. **Check isolation**: speculative validation never reaches committed state
//! 3. **Sequencing**: post numbers stay contiguous across blocks

#[cfg(test)]
mod tests {
    use crate::fixtures::{address, fresh_app, keypair, sign};
    use rand::Rng;
    use shared_crypto::Ed25519KeyPair;
    use shared_types::ResultCode;
    use sp_01_merkle_store::{MerkleStore, EMPTY_STORE_ROOT};
    use sp_02_signature_envelope::Action;
    use sp_03_post_store::{
        all_accounts, find_account, find_post, latest_post, posts_for_account, AccountKey,
        PostKey,
    };
    use sp_05_application::ApplicationApi;

    // =============================================================================
    // ACCOUNT THEN POST
    // =============================================================================

    #[test]
    fn test_account_then_post() {
        let mut app = fresh_app();
        let earl = keypair(0);
        assert_eq!(app.commit(), EMPTY_STORE_ROOT);

        app.begin_block(1);
        let created = app.append_tx(&sign(&Action::create_account("Grey"), &earl));
        assert!(created.is_ok(), "{}", created.log);
        assert_eq!(created.data, AccountKey::new(address(0)).encode().unwrap());
        app.end_block(1);
        let h1 = app.commit();
        assert_ne!(h1, EMPTY_STORE_ROOT);

        let post = sign(&Action::add_post("Good post", "Some important info"), &earl);
        app.begin_block(2);
        assert!(app.check_tx(&post).is_ok());
        assert_eq!(app.commit(), h1);

        let appended = app.append_tx(&post);
        assert!(appended.is_ok(), "{}", appended.log);
        assert_eq!(appended.data, PostKey::new(address(0), 1).encode().unwrap());
        app.end_block(2);
        let h2 = app.commit();
        assert_ne!(h2, h1);

        let stored = find_post(app.committed(), address(0), 1).unwrap().unwrap();
        assert_eq!(stored.title, "Good post");
        assert_eq!(stored.published_block, 2);
    }

    #[test]
    fn test_query_reads_committed_only() {
        let mut app = fresh_app();
        let tx = sign(&Action::create_account("Grey"), &keypair(0));
        let key = AccountKey::new(address(0)).encode().unwrap();

        app.check_tx(&tx);
        assert_eq!(app.query(&key).code, ResultCode::UnknownAddress);

        app.append_tx(&tx);
        assert!(app.query(&key).is_ok());
    }

    // =============================================================================
    // CHECK ISOLATION
    // =============================================================================

    #[test]
    fn test_check_sequence_leaves_committed_hash() {
        let mut app = fresh_app();
        app.append_tx(&sign(&Action::create_account("Grey"), &keypair(0)));
        let committed = app.commit();

        for n in 1..6u8 {
            let key = keypair(n);
            app.check_tx(&sign(&Action::create_account(format!("user{n}")), &key));
            app.check_tx(&sign(&Action::add_post("draft", "..."), &key));
        }
        app.check_tx(&sign(&Action::add_post("draft", "..."), &keypair(0)));

        assert_eq!(app.committed().root_hash(), committed);
        assert_eq!(app.commit(), committed);
    }

    #[test]
    fn test_check_predicts_append() {
        let mut app = fresh_app();
        let txs = vec![
            sign(&Action::create_account("Grey"), &keypair(0)),
            sign(&Action::add_post("first", "..."), &keypair(0)),
            sign(&Action::add_post("orphan", "..."), &keypair(1)),
            sign(&Action::create_account("Grey"), &keypair(2)),
            sign(&Action::create_account("Blue"), &keypair(2)),
        ];

        let checked: Vec<_> = txs.iter().map(|tx| app.check_tx(tx).code).collect();
        let appended: Vec<_> = txs.iter().map(|tx| app.append_tx(tx).code).collect();

        assert_eq!(checked, appended);
        assert_eq!(
            appended,
            vec![
                ResultCode::Ok,
                ResultCode::Ok,
                ResultCode::UnknownAddress,
                ResultCode::DuplicateAddress,
                ResultCode::Ok,
            ]
        );
    }

    // =============================================================================
    // SEQUENCING
    // =============================================================================

    #[test]
    fn test_posts_stay_contiguous_across_blocks() {
        let mut app = fresh_app();
        let author = keypair(3);
        app.append_tx(&sign(&Action::create_account("Writer"), &author));

        for height in 1..=4u64 {
            app.begin_block(height);
            for i in 0..height {
                let title = format!("block {height} post {i}");
                assert!(app.append_tx(&sign(&Action::add_post(title, "..."), &author)).is_ok());
            }
            app.end_block(height);
            app.commit();
        }

        let posts = posts_for_account(app.committed(), address(3)).unwrap();
        let numbers: Vec<u32> = posts.iter().map(|p| p.number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u32>>());

        let account = find_account(app.committed(), address(3)).unwrap().unwrap();
        assert_eq!(account.entry_count, 10);
        assert_eq!(latest_post(app.committed(), address(3)).unwrap().unwrap().published_block, 4);
    }

    #[test]
    fn test_many_random_signers() {
        let mut app = fresh_app();
        let mut rng = rand::thread_rng();
        let keys: Vec<Ed25519KeyPair> = (0..20)
            .map(|_| Ed25519KeyPair::from_seed(rng.gen()))
            .collect();

        for (i, key) in keys.iter().enumerate() {
            let result = app.append_tx(&sign(&Action::create_account(format!("user-{i}")), key));
            assert!(result.is_ok(), "{}", result.log);
        }
        app.commit();

        let accounts = all_accounts(app.committed()).unwrap();
        assert_eq!(accounts.len(), keys.len());
        assert!(accounts.windows(2).all(|w| w[0].id < w[1].id));
    }
}
