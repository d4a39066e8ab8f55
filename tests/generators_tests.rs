use std::sync::Arc;
use std::thread;

use ctor::ctor;
use rand::SeedableRng;
use rand::rngs::StdRng;
use secretforge::config::{create_generator, generate_all};
use secretforge::generators::alphabet::PUNCTUATION;
use secretforge::{
    GeneratorConfig, GeneratorError, MemorableOptions, MemorablePasswordGenerator, PinGenerator,
    RandomPasswordGenerator, SecretGenerator, SecretsDocument, WordSource,
};
use serde_json::{Value, json};

#[ctor]
fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

struct StaticWords(Vec<&'static str>);

impl WordSource for StaticWords {
    fn words(&self) -> secretforge::Result<Vec<String>> {
        Ok(self.0.iter().map(|w| w.to_string()).collect())
    }
}

struct UnreachableCorpus;

impl WordSource for UnreachableCorpus {
    fn words(&self) -> secretforge::Result<Vec<String>> {
        Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "corpus offline").into())
    }
}

#[test]
fn pin_scenario_six_digits() {
    let pin = PinGenerator::new(6).unwrap().generate();
    assert_eq!(pin.len(), 6);
    assert!(pin.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn random_scenario_letters_digits_punctuation() {
    let generator = RandomPasswordGenerator::new(10, true, true).unwrap();
    let password = generator.generate();
    assert_eq!(password.len(), 10);
    assert!(
        password
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || PUNCTUATION.contains(&b))
    );
}

#[test]
fn memorable_scenario_upper_cased_words() {
    let generator = MemorablePasswordGenerator::from_source(
        MemorableOptions {
            word_count: 3,
            separator: "-".to_string(),
            capitalization: true,
        },
        &StaticWords(vec!["cat", "dog", "sun"]),
    )
    .unwrap();

    let password = generator.generate();
    let words: Vec<&str> = password.split('-').collect();
    assert_eq!(words.len(), 3);
    assert!(words.iter().all(|w| ["CAT", "DOG", "SUN"].contains(w)));
}

#[test]
fn zero_parameters_fail_at_construction() {
    assert!(matches!(
        PinGenerator::new(0),
        Err(GeneratorError::InvalidArgument(_))
    ));
    assert!(matches!(
        RandomPasswordGenerator::new(0, false, false),
        Err(GeneratorError::InvalidArgument(_))
    ));
    assert!(matches!(
        MemorablePasswordGenerator::new(
            MemorableOptions {
                word_count: 0,
                ..Default::default()
            },
            vec!["cat".to_string()]
        ),
        Err(GeneratorError::InvalidArgument(_))
    ));
}

#[test]
fn explicit_empty_vocabulary_is_a_configuration_error() {
    let result = MemorablePasswordGenerator::new(MemorableOptions::default(), Vec::new());
    assert!(matches!(result, Err(GeneratorError::Configuration(_))));
}

#[test]
fn unreachable_word_source_error_reaches_caller() {
    let result = MemorablePasswordGenerator::from_source(MemorableOptions::default(), &UnreachableCorpus);
    match result {
        Err(GeneratorError::WordSource(io)) => {
            assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused)
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn mixed_generators_share_one_interface() {
    let generators: Vec<Box<dyn SecretGenerator>> = vec![
        Box::new(PinGenerator::new(4).unwrap()),
        Box::new(RandomPasswordGenerator::letters_only(8).unwrap()),
        Box::new(
            MemorablePasswordGenerator::with_default_vocabulary(MemorableOptions::default())
                .unwrap(),
        ),
    ];

    let mut rng = StdRng::seed_from_u64(2024);
    let outputs: Vec<String> = generators.iter().map(|g| g.generate_with(&mut rng)).collect();
    assert_eq!(outputs[0].len(), 4);
    assert_eq!(outputs[1].len(), 8);
    assert_eq!(outputs[2].split('-').count(), 5);
}

#[test]
fn generators_can_be_shared_across_threads() {
    let generator = Arc::new(RandomPasswordGenerator::new(12, true, false).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            thread::spawn(move || generator.generate())
        })
        .collect();

    for handle in handles {
        let password = handle.join().unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn generator_config_serialises_with_type_tag() {
    let config = GeneratorConfig::Random {
        length: 16,
        include_numbers: true,
        include_symbols: false,
    };
    let value: Value = serde_json::to_value(&config).unwrap();
    assert_eq!(
        value,
        json!({"type": "random", "length": 16, "include_numbers": true, "include_symbols": false})
    );

    let parsed: GeneratorConfig =
        serde_json::from_value(json!({"type": "memorable", "word_count": 2})).unwrap();
    let generator = create_generator(&parsed).unwrap();
    assert_eq!(generator.generate().split('-').count(), 2);
}

#[test]
fn yaml_document_generates_named_secrets() {
    let doc = SecretsDocument::from_yaml(
        r#"
secrets:
  - name: luks_pin
    type: pin
    length: 8
  - name: admin_password
    type: random
    length: 24
    include_numbers: true
    include_symbols: true
    hashing_algorithm: yescrypt
  - name: wifi_phrase
    type: memorable
    word_count: 4
    separator: " "
"#,
    )
    .unwrap();

    let secrets = generate_all(&doc.secrets).unwrap();
    assert_eq!(secrets.len(), 3);
    assert_eq!(secrets["luks_pin"].value.len(), 8);
    assert_eq!(secrets["admin_password"].value.len(), 24);
    assert!(
        secrets["admin_password"]
            .hashed
            .as_deref()
            .unwrap()
            .starts_with("$y$")
    );
    assert_eq!(secrets["wifi_phrase"].value.split(' ').count(), 4);
}
