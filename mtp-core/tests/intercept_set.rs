#![allow(missing_docs)]
//! End-to-end run over the eight intercepted messages this toolkit was
//! originally built around: same 58-byte key stream across all lines.

use mtp_core::{CipherMatrix, Crib, Key, crack_partial, detect_spaces};

const INTERCEPTS: [&str; 8] = [
    "F9B4228898864FCB32D83F3DFD7589F109E33988FA8C7A9E9170FB923065F52DD648AA2B8359E1D122122738A8B9998BE278B2BD7CF3313C7609",
    "F5BF229F8F9B1C8832C0212DFD7F92EA18FF29C7E6C968848D6EFAC16074F129D640AB67CE59E3DC6109212AB4EB959FFD34F3B269EB292C7409",
    "FDAF668499C801C734813F3BF3718FF91AEA2C88FC862B999D6EE7C16369F83ADF57FF28CD18FCCC6F0D2B2BB5A295DEF436B0A164EF3C267014",
    "FDFB35858B8403882EC4392CE03289F50CF82588FC816ECB8B63F3843076F52CC059B035C718E0DB220D3B33B3A28692F478B2B07EF03D216B09",
    "E4BE239FCA9A0ADE29C43869FD74DBE31CE835DAE19D72CB9567FD897168FD2CDE5DFF35C65CFAD667136E29B2A7989BE339B1BA71F63C267A09",
    "F8BE279F848101CF60C9203EB26694B00EF929DCEDC9788E9B77EC843075FB39C759BE35C618E6C622016E31A2A8938DE239A1AA3DEC23267316",
    "E7BE2598988D4FC325D86F2CEA7193F117EC2588E19A2B859D67FA847426F230C10EAC3ECE55EAC170092D7FACAE8FDEF436B0A164EF3C267014",
    "E7BE259898811BD160C03B69E67A9EB01CF330CDE69A6ECB9764BE946367F636DF47AB3E835BE0C06E046E3BA6A69799F478A0B67EEA3A266B03",
];

const DECRYPTED: [&str; 8] = [
    "Modern cryptography requires careful and rigorous analysis",
    "Address randomization could prevent malicious call attacks",
    "It is not practical to rely solely on symmetric encryption",
    "I shall never reuse the same password on multiple accounts",
    "Peer review of security mechanisms reduces vulnerabilities",
    "Learning how to write secure software is a necessary skill",
    "Secure key exchange is needed for symmetric key encryption",
    "Security at the expense of usability could damage security",
];

#[test]
fn test_partial_crack_of_intercept_set() {
    let matrix = CipherMatrix::from_hex_lines(&INTERCEPTS).expect("valid intercepts");
    assert_eq!(matrix.line_count(), 8);
    assert_eq!(matrix.width(), 58);

    let mask = detect_spaces(&matrix);
    let recovered = crack_partial(&matrix, &mask);

    let expected = [
        "\u{b7}od\u{b7}rn cryptogra\u{b7}\u{b7}\u{b7} \u{b7}equ\u{b7}\u{b7}es c\u{b7}\u{b7}\u{b7}ful a\u{b7}\u{b7} \u{b7}ig\u{b7}r\u{b7}u\u{b7} a\u{b7}a\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7}dd\u{b7}ess randomiz\u{b7}\u{b7}\u{b7}o\u{b7} co\u{b7}\u{b7}d pr\u{b7}\u{b7}\u{b7}nt ma\u{b7}\u{b7}c\u{b7}ou\u{b7} \u{b7}a\u{b7}l \u{b7}t\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7}t \u{b7}s not practi\u{b7}\u{b7}\u{b7} \u{b7}o r\u{b7}\u{b7}y so\u{b7}\u{b7}\u{b7}y on \u{b7}\u{b7}m\u{b7}et\u{b7}i\u{b7} \u{b7}nc\u{b7}y\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7} s\u{b7}all never re\u{b7}\u{b7}\u{b7} \u{b7}he \u{b7}\u{b7}me p\u{b7}\u{b7}\u{b7}word \u{b7}\u{b7} \u{b7}ul\u{b7}i\u{b7}l\u{b7} a\u{b7}c\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7}ee\u{b7} review of s\u{b7}\u{b7}\u{b7}r\u{b7}ty \u{b7}\u{b7}chan\u{b7}\u{b7}\u{b7}s red\u{b7}\u{b7}e\u{b7} v\u{b7}l\u{b7}e\u{b7}ab\u{b7}l\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7}ea\u{b7}ning how to \u{b7}\u{b7}\u{b7}t\u{b7} se\u{b7}\u{b7}re s\u{b7}\u{b7}\u{b7}ware \u{b7}\u{b7} \u{b7} n\u{b7}c\u{b7}s\u{b7}ar\u{b7} \u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7}ec\u{b7}re key excha\u{b7}\u{b7}\u{b7} \u{b7}s n\u{b7}\u{b7}ded \u{b7}\u{b7}\u{b7} symm\u{b7}\u{b7}r\u{b7}c \u{b7}e\u{b7} \u{b7}nc\u{b7}y\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
        "\u{b7}ec\u{b7}rity at the \u{b7}\u{b7}\u{b7}e\u{b7}se \u{b7}\u{b7} usa\u{b7}\u{b7}\u{b7}ity c\u{b7}\u{b7}l\u{b7} d\u{b7}m\u{b7}g\u{b7} s\u{b7}c\u{b7}\u{b7}\u{b7}\u{b7}\u{b7}",
    ];
    assert_eq!(recovered, expected);
}

#[test]
fn test_crib_based_full_decryption_of_intercept_set() {
    let matrix = CipherMatrix::from_hex_lines(&INTERCEPTS).expect("valid intercepts");

    // The two fragments the partial crack made obvious: the opening of
    // line 0, and the "encryption" tail on line 2 starting right after
    // the first fragment's 48 columns.
    let cribs = [
        Crib::new(0, 0, "Modern cryptography requires careful and rigorou"),
        Crib::new(2, 48, "encryption"),
    ];
    let key = Key::derive(&matrix, &cribs).expect("consistent crib pair");
    assert_eq!(key.len(), 58);
    assert_eq!(key.covered_count(), 58);

    let plain = key.decrypt(&matrix).expect("fully covered span");
    assert_eq!(plain, DECRYPTED);
}
