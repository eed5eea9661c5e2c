//! Integration tests for the SynVM engine
//!
//! Exercises the full path a harness uses:
//! - program execution per case (setup, dispatch, halt)
//! - the tolerance comparator on results
//! - per-case failure isolation
//! - the serde loader boundary (JSON-built programs and contexts)

use synvm::{
    compare, expected_matches, run_cases, Case, Context, EngineConfig, ExecError, ExecState,
    Instruction, Opcode, Param, Value,
};

fn lit(v: Value) -> Param {
    Param::Literal(v)
}

fn name(s: &str) -> Param {
    Param::Literal(Value::Text(s.to_string()))
}

fn local(s: &str) -> Param {
    Param::Local(s.to_string())
}

fn no_input_context() -> Context {
    Context::new(vec![], vec![Case::new(vec![])], Value::Float(0.01))
}

/// Run a program with no inputs and return its result
fn run(program: &[Instruction]) -> Option<Value> {
    let ctx = no_input_context();
    let mut state = ExecState::for_case(program, &ctx, 0).unwrap();
    state.run(&EngineConfig::default()).unwrap()
}

// ============================================
// Worked examples
// ============================================

#[test]
fn test_let_add_ret_yields_five() {
    // [LET x = 2, LET y = 3, ADD x, x, y, RET x] over Int yields 5.
    let program = vec![
        Instruction::new(Opcode::Let, vec![name("x"), lit(Value::Int(2))]),
        Instruction::new(Opcode::Let, vec![name("y"), lit(Value::Int(3))]),
        Instruction::new(Opcode::Add, vec![name("x"), local("x"), local("y")]),
        Instruction::new(Opcode::Ret, vec![local("x")]),
    ];
    assert_eq!(run(&program), Some(Value::Int(5)));
}

#[test]
fn test_jump_skips_print() {
    // [JUMP 2, PRINT 99, LET z = 1, RET z] yields 1 with no print emitted.
    let program = vec![
        Instruction::new(Opcode::Jump, vec![lit(Value::Int(2))]),
        Instruction::new(Opcode::Print, vec![lit(Value::Int(99))]),
        Instruction::new(Opcode::Let, vec![name("z"), lit(Value::Int(1))]),
        Instruction::new(Opcode::Ret, vec![local("z")]),
    ];
    let ctx = no_input_context();
    let mut state = ExecState::for_case(&program, &ctx, 0).unwrap();
    let result = state.run(&EngineConfig::default()).unwrap();
    assert_eq!(result, Some(Value::Int(1)));
    assert!(state.prints.is_empty());
}

#[test]
fn test_comparator_tolerance_example() {
    // tolerance 0.01: 2.0 vs 2.005 matches, 2.0 vs 2.02 does not.
    let ctx = no_input_context();
    assert!(compare(&ctx, &Value::Float(2.0), &Value::Float(2.005)).unwrap());
    assert!(!compare(&ctx, &Value::Float(2.0), &Value::Float(2.02)).unwrap());
}

#[test]
fn test_polynomial_over_inputs() {
    // result = a * a + b, driven per case through the harness.
    let program = vec![
        Instruction::new(Opcode::Let, vec![name("r"), lit(Value::Int(0))]),
        Instruction::new(Opcode::Add, vec![name("r"), local("a"), lit(Value::Int(0))]),
        Instruction::new(Opcode::Mul, vec![name("r"), local("r"), local("a")]),
        Instruction::new(Opcode::Add, vec![name("r"), local("r"), local("b")]),
        Instruction::new(Opcode::Ret, vec![local("r")]),
    ];
    let ctx = Context::new(
        vec!["a".to_string(), "b".to_string()],
        vec![
            Case::new(vec![Value::Int(2), Value::Int(1)]),
            Case::new(vec![Value::Int(3), Value::Int(4)]),
            Case::new(vec![Value::Int(-5), Value::Int(0)]),
        ],
        Value::Float(0.01),
    );

    let outcomes = run_cases(&program, &ctx, &EngineConfig::default());
    let expected = [Value::Int(5), Value::Int(13), Value::Int(25)];
    for (outcome, want) in outcomes.iter().zip(expected.iter()) {
        assert!(expected_matches(&ctx, outcome, want).unwrap());
    }
}

// ============================================
// Case isolation
// ============================================

#[test]
fn test_cases_never_observe_each_other() {
    // The program mutates both its input and a fresh binding; every case
    // must start from its own cloned inputs only.
    let program = vec![
        Instruction::new(Opcode::Let, vec![name("acc"), local("n")]),
        Instruction::new(Opcode::Add, vec![name("acc"), local("acc"), local("n")]),
        Instruction::new(Opcode::Ret, vec![local("acc")]),
    ];
    let ctx = Context::new(
        vec!["n".to_string()],
        vec![
            Case::new(vec![Value::Int(1)]),
            Case::new(vec![Value::Int(100)]),
        ],
        Value::Float(0.01),
    );
    let outcomes = run_cases(&program, &ctx, &EngineConfig::default());
    assert_eq!(outcomes[0].result.as_ref().unwrap(), &Some(Value::Int(2)));
    assert_eq!(outcomes[1].result.as_ref().unwrap(), &Some(Value::Int(200)));
}

#[test]
fn test_bad_case_isolated_from_batch() {
    let program = vec![
        Instruction::new(Opcode::Print, vec![local("n")]),
        Instruction::new(Opcode::Ret, vec![local("n")]),
    ];
    let ctx = Context::new(
        vec!["n".to_string()],
        vec![
            Case::new(vec![Value::Text("unprintable".to_string())]),
            Case::new(vec![Value::Int(11)]),
        ],
        Value::Float(0.01),
    );
    let outcomes = run_cases(&program, &ctx, &EngineConfig::default());
    assert_eq!(
        outcomes[0].result,
        Err(ExecError::UnsupportedPrint { type_name: "text" })
    );
    assert_eq!(outcomes[1].result.as_ref().unwrap(), &Some(Value::Int(11)));
    assert_eq!(outcomes[1].prints, vec!["11".to_string()]);
}

// ============================================
// Loops and limits
// ============================================

#[test]
fn test_sum_one_to_n_loop() {
    // sum = 1 + 2 + ... + n with CMP/JUMP, n = 5.
    let program = vec![
        Instruction::new(Opcode::Let, vec![name("i"), lit(Value::Int(0))]),
        Instruction::new(Opcode::Let, vec![name("sum"), lit(Value::Int(0))]),
        Instruction::new(
            Opcode::Cmp,
            vec![local("i"), local("n"), lit(Value::Int(6))],
        ),
        Instruction::new(Opcode::Add, vec![name("i"), local("i"), lit(Value::Int(1))]),
        Instruction::new(Opcode::Add, vec![name("sum"), local("sum"), local("i")]),
        Instruction::new(Opcode::Jump, vec![lit(Value::Int(2))]),
        Instruction::new(Opcode::Ret, vec![local("sum")]),
    ];
    let ctx = Context::new(
        vec!["n".to_string()],
        vec![Case::new(vec![Value::Int(5)])],
        Value::Float(0.01),
    );
    let outcomes = run_cases(&program, &ctx, &EngineConfig::default());
    assert_eq!(outcomes[0].result.as_ref().unwrap(), &Some(Value::Int(15)));
}

#[test]
fn test_runaway_loop_hits_step_limit() {
    let program = vec![
        Instruction::new(Opcode::Print, vec![lit(Value::Int(1))]),
        Instruction::new(Opcode::Jump, vec![lit(Value::Int(0))]),
    ];
    let ctx = no_input_context();
    let config = EngineConfig {
        max_steps: 1000,
        ..EngineConfig::default()
    };
    let outcomes = run_cases(&program, &ctx, &config);
    assert_eq!(
        outcomes[0].result,
        Err(ExecError::StepLimitExceeded { limit: 1000 })
    );
}

// ============================================
// Loader boundary (serde)
// ============================================

#[test]
fn test_program_from_json() {
    let json = r#"[
        {"op": "Let", "params": [
            {"Literal": {"Text": "x"}},
            {"Literal": {"Int": 2}}
        ]},
        {"op": "Mul", "params": [
            {"Literal": {"Text": "x"}},
            {"Local": "x"},
            {"Literal": {"Int": 21}}
        ]},
        {"op": "Ret", "params": [{"Local": "x"}]}
    ]"#;
    let program: Vec<Instruction> = serde_json::from_str(json).unwrap();
    assert_eq!(run(&program), Some(Value::Int(42)));
}

#[test]
fn test_context_from_json() {
    let json = r#"{
        "input_names": ["a"],
        "cases": [
            {"inputs": [{"Float": 1.5}]},
            {"inputs": [{"Float": 2.5}]}
        ],
        "precision": {"Float": 0.001}
    }"#;
    let ctx: Context = serde_json::from_str(json).unwrap();
    assert_eq!(ctx.case_count(), 2);

    let program = vec![
        Instruction::new(
            Opcode::Add,
            vec![name("a"), local("a"), lit(Value::Float(0.5))],
        ),
        Instruction::new(Opcode::Ret, vec![local("a")]),
    ];
    let outcomes = run_cases(&program, &ctx, &EngineConfig::default());
    assert!(expected_matches(&ctx, &outcomes[0], &Value::Float(2.0)).unwrap());
    assert!(expected_matches(&ctx, &outcomes[1], &Value::Float(3.0)).unwrap());
}

#[test]
fn test_instruction_round_trips_through_json() {
    let inst = Instruction::new(
        Opcode::Cmp,
        vec![local("i"), lit(Value::Int(0)), lit(Value::Int(7))],
    );
    let json = serde_json::to_string(&inst).unwrap();
    let back: Instruction = serde_json::from_str(&json).unwrap();
    assert_eq!(inst, back);
}
