//! Property tests over random transaction sequences.
//!
//! Two applications fed the same sequence must agree on every committed
//! hash, and the stored accounts and posts must stay internally consistent
//! whatever mix of valid and invalid actions was applied.

#[cfg(test)]
mod tests {
    use crate::fixtures::{fresh_app, keypair, sign};
    use proptest::prelude::*;
    use shared_types::Hash;
    use sp_01_merkle_store::{MemoryMerkleStore, MerkleStore};
    use sp_02_signature_envelope::Action;
    use sp_03_post_store::{all_accounts, posts_for_account};
    use sp_05_application::{Application, ApplicationApi};
    use std::collections::HashSet;

    #[derive(Clone, Debug)]
    enum Step {
        Create { signer: u8, name: String },
        Post { signer: u8, title: String },
        Commit,
    }

    fn arb_step() -> impl Strategy<Value = Step> {
        prop_oneof![
            3 => (0u8..4, "[a-c]{1,2}").prop_map(|(signer, name)| Step::Create { signer, name }),
            4 => (0u8..4, "[a-z]{0,8}").prop_map(|(signer, title)| Step::Post { signer, title }),
            1 => Just(Step::Commit),
        ]
    }

    fn tx(step: &Step) -> Option<Vec<u8>> {
        match step {
            Step::Create { signer, name } => {
                Some(sign(&Action::create_account(name.as_str()), &keypair(*signer)))
            }
            Step::Post { signer, title } => {
                Some(sign(&Action::add_post(title.as_str(), "body"), &keypair(*signer)))
            }
            Step::Commit => None,
        }
    }

    /// Apply `steps` to a fresh application, one block per `Commit`.
    fn run(steps: &[Step]) -> (Application<MemoryMerkleStore>, Vec<Hash>) {
        let mut app = fresh_app();
        let mut hashes = Vec::new();
        let mut height = 1;
        app.begin_block(height);
        for step in steps {
            match tx(step) {
                Some(tx) => {
                    app.append_tx(&tx);
                }
                None => {
                    app.end_block(height);
                    hashes.push(app.commit());
                    height += 1;
                    app.begin_block(height);
                }
            }
        }
        app.end_block(height);
        hashes.push(app.commit());
        (app, hashes)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_replicas_agree(steps in prop::collection::vec(arb_step(), 0..40)) {
            let (_, first) = run(&steps);
            let (_, second) = run(&steps);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_state_stays_consistent(steps in prop::collection::vec(arb_step(), 0..40)) {
            let (app, _) = run(&steps);
            let accounts = all_accounts(app.committed()).unwrap();

            let names: HashSet<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
            prop_assert_eq!(names.len(), accounts.len());

            let mut total = 0;
            for account in &accounts {
                let numbers: Vec<u32> = posts_for_account(app.committed(), account.id)
                    .unwrap()
                    .iter()
                    .map(|p| p.number)
                    .collect();
                prop_assert_eq!(numbers, (1..=account.entry_count).collect::<Vec<u32>>());
                total += account.entry_count as usize;
            }
            prop_assert_eq!(app.committed().size(), accounts.len() + total);
        }

        #[test]
        fn prop_check_only_leaves_committed_root(
            prefix in prop::collection::vec(arb_step(), 0..20),
            checks in prop::collection::vec(arb_step(), 1..20),
        ) {
            let (mut app, hashes) = run(&prefix);
            let root = app.committed().root_hash();
            prop_assert_eq!(Some(&root), hashes.last());

            for bytes in checks.iter().filter_map(tx) {
                app.check_tx(&bytes);
            }
            prop_assert_eq!(app.committed().root_hash(), root);
            prop_assert_eq!(app.commit(), root);
        }
    }
}
