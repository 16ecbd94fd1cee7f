use hushwave::domain::AudioFormat;

#[test]
fn given_known_extensions_when_parsing_then_case_is_ignored() {
    assert_eq!(AudioFormat::from_extension("WAV"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_extension("Mp3"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_extension("flac"), Some(AudioFormat::Flac));
    assert_eq!(AudioFormat::from_extension("ogg"), Some(AudioFormat::Ogg));
    assert_eq!(AudioFormat::from_extension("m4a"), Some(AudioFormat::M4a));
    assert_eq!(AudioFormat::from_extension("txt"), None);
}

#[test]
fn given_filename_with_directories_when_detecting_then_uses_last_extension() {
    assert_eq!(
        AudioFormat::from_filename("uploads/2024/take.final.FLAC"),
        Some(AudioFormat::Flac)
    );
    assert_eq!(AudioFormat::from_filename(".wav"), None);
    assert_eq!(AudioFormat::from_filename("README"), None);
}

#[test]
fn given_common_mime_aliases_when_parsing_then_resolved() {
    assert_eq!(AudioFormat::from_mime("audio/x-wav"), Some(AudioFormat::Wav));
    assert_eq!(AudioFormat::from_mime("audio/mpeg"), Some(AudioFormat::Mp3));
    assert_eq!(AudioFormat::from_mime("application/octet-stream"), None);
}

#[test]
fn given_wav_format_when_reading_mime_then_returns_audio_wav() {
    assert_eq!(AudioFormat::Wav.as_mime(), "audio/wav");
    assert_eq!(AudioFormat::Wav.extension(), "wav");
}
