use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tameng::analysis::normalizer::{TextNormalizer, normalize};

const LETTERS_AND_SPACE: &[char] = &[
    'a', 'B', 'c', 'D', 'e', 'z', 'Q', '0', '5', '9', ' ', ' ', '\t', '\n', '\u{1c}', 'é', 'Ü',
    'ß', '٣', '京', '\u{3000}',
];

/// Letters, digits, whitespace and every ASCII punctuation character.
fn alphabet() -> Vec<char> {
    let punctuation = (b'!'..=b'~')
        .filter(u8::is_ascii_punctuation)
        .map(char::from);
    LETTERS_AND_SPACE.iter().copied().chain(punctuation).collect()
}

fn random_text(rng: &mut StdRng, alphabet: &[char]) -> String {
    let len = rng.random_range(0..64);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

#[test]
fn alphabet_covers_ascii_punctuation() {
    let alphabet = alphabet();
    assert_eq!(
        alphabet.iter().filter(|c| c.is_ascii_punctuation()).count(),
        32
    );
}

#[test]
fn normalization_is_idempotent() {
    let alphabet = alphabet();
    let mut rng = StdRng::seed_from_u64(20240601);
    for _ in 0..500 {
        let text = random_text(&mut rng, &alphabet);
        let once = normalize(&text);
        assert_eq!(normalize(&once), once, "input {text:?}");
    }
}

#[test]
fn normalized_text_has_no_digits_or_punctuation() {
    let alphabet = alphabet();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let text = random_text(&mut rng, &alphabet);
        let normalized = normalize(&text);
        assert!(
            !normalized.chars().any(|c| c.is_ascii_digit()),
            "digit left in {normalized:?}"
        );
        assert!(
            !normalized.chars().any(|c| c.is_ascii_punctuation()),
            "punctuation left in {normalized:?}"
        );
    }
}

#[test]
fn normalized_text_has_single_inner_spaces() {
    let alphabet = alphabet();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let text = random_text(&mut rng, &alphabet);
        let normalized = normalize(&text);
        assert!(!normalized.starts_with(' ') && !normalized.ends_with(' '));
        assert!(!normalized.contains("  "));
        assert!(
            normalized
                .chars()
                .all(|c| c == ' ' || !c.is_whitespace()),
            "unexpected whitespace in {normalized:?}"
        );
    }
}

#[test]
fn normalized_text_is_lowercase() {
    let alphabet = alphabet();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let normalized = normalize(&random_text(&mut rng, &alphabet));
        assert_eq!(normalized.to_lowercase(), normalized);
    }
}

#[test]
fn standard_normalizer_matches_free_function() {
    let normalizer = TextNormalizer::standard();
    let alphabet = alphabet();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let text = random_text(&mut rng, &alphabet);
        assert_eq!(normalizer.normalize(&text), normalize(&text));
    }
}

#[test]
fn known_billing_messages() {
    let cases = [
        (
            "Tagihan PayLater Anda belum dibayar. Denda akan dikenakan hari ini.",
            "tagihan paylater anda belum dibayar denda akan dikenakan hari ini",
        ),
        ("12345!!!", ""),
        ("  Promo   0%\tbunga\n", "promo bunga"),
        ("Rp.1.500.000,- SEGERA", "rp segera"),
        ("Halo, apa kabar?", "halo apa kabar"),
        ("[Info] {kode}|<cek>\\`^$", "info kodecek"),
    ];
    for (input, expected) in cases {
        assert_eq!(normalize(input), expected);
    }
}
