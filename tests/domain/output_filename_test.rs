use hushwave::domain::{AudioFormat, OutputFilename, sanitize_base_name};

#[test]
fn given_plain_name_when_deriving_then_format_is_base_denoised_token_extension() {
    let name = OutputFilename::with_token("interview.mp3", "a1b2c3d4", AudioFormat::Wav);

    assert_eq!(name.as_str(), "interview_denoised_a1b2c3d4.wav");
}

#[test]
fn given_two_derivations_of_same_name_when_comparing_then_tokens_differ() {
    let first = OutputFilename::derive("take.wav", AudioFormat::Wav);
    let second = OutputFilename::derive("take.wav", AudioFormat::Wav);

    assert_ne!(first, second);
    assert!(first.as_str().starts_with("take_denoised_"));
    assert_eq!(first.as_str().len(), "take_denoised_".len() + 8 + ".wav".len());
}

#[test]
fn given_path_traversal_when_sanitizing_then_only_last_segment_remains() {
    assert_eq!(sanitize_base_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_base_name(r"C:\Users\me\Desktop\memo.flac"), "memo");
}

#[test]
fn given_unsafe_characters_when_sanitizing_then_replaced_with_single_underscore() {
    assert_eq!(sanitize_base_name("my  song (live)!.ogg"), "my_song_live");
    assert_eq!(sanitize_base_name("quote\"and;semi.wav"), "quote_and_semi");
}

#[test]
fn given_name_without_usable_characters_when_sanitizing_then_falls_back_to_audio() {
    assert_eq!(sanitize_base_name(""), "audio");
    assert_eq!(sanitize_base_name("???.wav"), "audio");
    assert_eq!(sanitize_base_name("音声.wav"), "audio");
}

#[test]
fn given_dotfile_when_sanitizing_then_keeps_name_as_stem() {
    assert_eq!(sanitize_base_name(".hidden"), "hidden");
}

#[test]
fn given_very_long_name_when_sanitizing_then_truncated_to_64_chars() {
    let long = format!("{}.wav", "x".repeat(300));

    let base = sanitize_base_name(&long);

    assert_eq!(base.len(), 64);
}

#[test]
fn given_derived_name_when_displayed_then_matches_as_str() {
    let name = OutputFilename::derive("clip.wav", AudioFormat::Wav);

    assert_eq!(name.to_string(), name.as_str());
}

#[test]
fn given_derived_name_when_restored_from_storage_then_equal() {
    let name = OutputFilename::derive("clip.wav", AudioFormat::Wav);

    assert_eq!(OutputFilename::from_stored(name.as_str()), Some(name));
}

#[test]
fn given_unsafe_stored_name_when_restoring_then_rejected() {
    assert!(OutputFilename::from_stored("").is_none());
    assert!(OutputFilename::from_stored(".wav").is_none());
    assert!(OutputFilename::from_stored("a/b.wav").is_none());
    assert!(OutputFilename::from_stored("a\"b.wav").is_none());
}
