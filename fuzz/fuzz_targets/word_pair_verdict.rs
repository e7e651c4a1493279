#![no_main]

use libfuzzer_sys::fuzz_target;
use twinword_core::{decode_pair, evaluate, test_one_input, Verdict, INPUT_LEN, STATUS_CONTINUE};

fuzz_target!(|data: &[u8]| {
    let verdict = evaluate(data);

    // Cross-check against a plain byte comparison of the halves
    let expected = if data.len() != INPUT_LEN {
        Verdict::WrongLength
    } else if data[..INPUT_LEN / 2] == data[INPUT_LEN / 2..] {
        Verdict::Equal
    } else {
        Verdict::Distinct
    };
    assert_eq!(verdict, expected);

    // Decoder must agree with the verdict and restore the input bytes
    match decode_pair(data) {
        Ok(pair) => {
            assert_eq!(pair.is_matched(), verdict == Verdict::Equal);
            assert_eq!(&pair.to_bytes()[..], data);
        }
        Err(_) => assert_eq!(verdict, Verdict::WrongLength),
    }

    assert_eq!(test_one_input(data), STATUS_CONTINUE);
});
