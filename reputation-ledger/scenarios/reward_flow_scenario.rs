use multiversx_sc::types::Address;
use multiversx_sc_scenario::imports::OptionalValue;
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_token_id, rust_biguint,
    testing_framework::{BlockchainStateWrapper, ContractObjWrapper},
    DebugApi,
};

use reputation_ledger::custody::CustodyModule;
use reputation_ledger::*;

const WASM_PATH: &str = "output/reputation-ledger.wasm";
const REWARD_TOKEN_ID: &[u8] = b"REP-123456";
const DAY: u64 = 86_400;

// Estrutura para configuração do cenário
struct ContractSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> reputation_ledger::ContractObj<DebugApi>,
{
    pub blockchain_wrapper: BlockchainStateWrapper,
    pub admin_address: Address,
    pub users: Vec<Address>,
    pub contract_wrapper: ContractObjWrapper<reputation_ledger::ContractObj<DebugApi>, ContractObjBuilder>,
}

// Período de decaimento de 1 dia e peso máximo 10, para o cenário caber em poucas semanas
fn setup_contract<ContractObjBuilder>(
    builder: ContractObjBuilder,
) -> ContractSetup<ContractObjBuilder>
where
    ContractObjBuilder: 'static + Copy + Fn() -> reputation_ledger::ContractObj<DebugApi>,
{
    let rust_zero = rust_biguint!(0u64);
    let mut blockchain_wrapper = BlockchainStateWrapper::new();
    let admin_address = blockchain_wrapper.create_user_account(&rust_biguint!(1_000));
    blockchain_wrapper.set_esdt_balance(&admin_address, REWARD_TOKEN_ID, &rust_biguint!(100_000));

    let mut users = Vec::new();
    for _ in 0..4 {
        users.push(blockchain_wrapper.create_user_account(&rust_zero));
    }

    let contract_wrapper = blockchain_wrapper.create_sc_account(
        &rust_zero,
        Some(&admin_address),
        builder,
        WASM_PATH,
    );

    blockchain_wrapper
        .execute_tx(&admin_address, &contract_wrapper, &rust_zero, |sc| {
            sc.init(
                managed_token_id!(REWARD_TOKEN_ID),
                OptionalValue::Some(DAY),
                OptionalValue::Some(10u64),
            );
        })
        .assert_ok();

    ContractSetup {
        blockchain_wrapper,
        admin_address,
        users,
        contract_wrapper,
    }
}

// Cenário: a reputação evolui com o tempo e o admin premia quem tem nota alta
#[test]
fn test_reputation_reward_scenario() {
    let mut setup = setup_contract(reputation_ledger::contract_obj);
    let rater = setup.users[3].clone();

    // Dia 0: todos começam com notas diferentes
    let first_scores = [5u8, 3u8, 1u8];
    for (i, score) in first_scores.iter().enumerate() {
        let target = setup.users[i].clone();
        setup.blockchain_wrapper
            .execute_tx(&rater, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
                sc.submit_feedback(managed_address!(&target), *score);
            })
            .assert_ok();
    }

    for (i, score) in first_scores.iter().enumerate() {
        let target = setup.users[i].clone();
        setup.blockchain_wrapper
            .execute_query(&setup.contract_wrapper, |sc| {
                assert_eq!(sc.get_weighted_score(managed_address!(&target)), *score);
            })
            .assert_ok();
    }

    // Dia 9: o usuário 0 recebe uma nota baixa e o usuário 2 uma nota alta.
    // Pesos: entrada do dia 0 vale 1, entrada nova vale 10
    setup.blockchain_wrapper.set_block_timestamp(9 * DAY);
    let user0 = setup.users[0].clone();
    let user2 = setup.users[2].clone();
    setup.blockchain_wrapper
        .execute_tx(&rater, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.submit_feedback(managed_address!(&user0), 1u8);
            sc.submit_feedback(managed_address!(&user2), 5u8);
        })
        .assert_ok();

    setup.blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            // (5*1 + 1*10) / 11 = 1
            assert_eq!(sc.get_weighted_score(managed_address!(&user0)), 1u8);
            // (1*1 + 5*10) / 11 = 4
            assert_eq!(sc.get_weighted_score(managed_address!(&user2)), 4u8);
        })
        .assert_ok();

    // Admin deposita o orçamento de recompensas
    setup.blockchain_wrapper
        .execute_esdt_transfer(
            &setup.admin_address,
            &setup.contract_wrapper,
            REWARD_TOKEN_ID,
            0,
            &rust_biguint!(10_000),
            |sc| {
                sc.deposit_reward_tokens();
            },
        )
        .assert_ok();

    // Premia apenas quem tem reputação >= 4, com valor proporcional à nota
    let base_amount = 100u64;
    let mut paid_total = 0u64;
    for i in 0..3 {
        let target = setup.users[i].clone();
        let mut score = 0u8;
        setup.blockchain_wrapper
            .execute_query(&setup.contract_wrapper, |sc| {
                score = sc.get_weighted_score(managed_address!(&target));
            })
            .assert_ok();

        if score < 4 {
            continue;
        }

        let mut reward = 0u64;
        setup.blockchain_wrapper
            .execute_query(&setup.contract_wrapper, |sc| {
                reward = sc.calculate_reward(base_amount, u64::from(score));
            })
            .assert_ok();

        setup.blockchain_wrapper
            .execute_tx(&setup.admin_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
                sc.reward_with_token(managed_address!(&target), managed_biguint!(reward));
            })
            .assert_ok();
        paid_total += reward;
    }

    // Somente o usuário 2 (nota 4) foi premiado
    assert_eq!(paid_total, 400);
    setup.blockchain_wrapper.check_esdt_balance(&setup.users[2], REWARD_TOKEN_ID, &rust_biguint!(400));
    setup.blockchain_wrapper.check_esdt_balance(&setup.users[0], REWARD_TOKEN_ID, &rust_biguint!(0));
    setup.blockchain_wrapper.check_esdt_balance(&setup.users[1], REWARD_TOKEN_ID, &rust_biguint!(0));
    setup.blockchain_wrapper.check_esdt_balance(
        setup.contract_wrapper.address_ref(),
        REWARD_TOKEN_ID,
        &rust_biguint!(9_600),
    );

    // Dia 30: tudo envelheceu além do peso máximo, os pesos voltam a ser iguais
    setup.blockchain_wrapper.set_block_timestamp(30 * DAY);
    setup.blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            // (5 + 1) / 2 = 3
            assert_eq!(sc.get_weighted_score(managed_address!(&user0)), 3u8);
            // (1 + 5) / 2 = 3
            assert_eq!(sc.get_weighted_score(managed_address!(&user2)), 3u8);
        })
        .assert_ok();

    // Penalidade do admin no usuário 1 derruba a média recente
    let user1 = setup.users[1].clone();
    setup.blockchain_wrapper
        .execute_tx(&setup.admin_address, &setup.contract_wrapper, &rust_biguint!(0), |sc| {
            sc.apply_penalty(managed_address!(&user1), 1u8);
        })
        .assert_ok();

    setup.blockchain_wrapper
        .execute_query(&setup.contract_wrapper, |sc| {
            // (3*1 + 1*10) / 11 = 1
            assert_eq!(sc.get_weighted_score(managed_address!(&user1)), 1u8);
            assert_eq!(sc.get_feedback_count(managed_address!(&user1)), 2u64);
        })
        .assert_ok();

    // Bônus em EGLD para o usuário 2 enviado junto com a chamada
    setup.blockchain_wrapper
        .execute_tx(&setup.admin_address, &setup.contract_wrapper, &rust_biguint!(250), |sc| {
            sc.reward_with_native(managed_address!(&user2));
        })
        .assert_ok();

    setup.blockchain_wrapper.check_egld_balance(&setup.users[2], &rust_biguint!(250));
    setup.blockchain_wrapper.check_egld_balance(&setup.admin_address, &rust_biguint!(750));
    setup.blockchain_wrapper.check_egld_balance(setup.contract_wrapper.address_ref(), &rust_biguint!(0));
}
