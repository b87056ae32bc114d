use nucleo_core::{ContentAddressable, Sequence};
use nucleo_seq::{
    amino_acids_to_string, AminoAcid, Codon, Dna, GeneticCode, NucleoError, ReadingFrame, Rna,
    Strand,
};

fn symbols(aas: &[AminoAcid]) -> Vec<&'static str> {
    aas.iter().map(|aa| aa.symbol()).collect()
}

fn codon_strings(codons: &[Codon]) -> Vec<String> {
    codons.iter().map(|c| c.to_string()).collect()
}

#[test]
fn atg_full_pipeline() {
    let dna = Dna::new("ATG").unwrap();
    assert_eq!(dna.complement().as_str(), "TAC");
    assert_eq!(dna.reverse_complement().as_str(), "CAT");
    assert_eq!(dna.transcribe().as_str(), "AUG");
    assert_eq!(codon_strings(&dna.codons()), vec!["AUG"]);
    assert_eq!(symbols(&dna.translate()), vec!["M"]);
    // Receiver is never modified by a transform.
    assert_eq!(dna.as_str(), "ATG");
}

#[test]
fn taa_translates_to_stop() {
    let dna = Dna::new("TAA").unwrap();
    assert_eq!(symbols(&dna.translate()), vec!["Stop"]);
}

#[test]
fn atgatt_codons_and_frames() {
    let dna = Dna::new("ATGATT").unwrap();
    assert_eq!(codon_strings(&dna.codons()), vec!["AUG", "AUU"]);
    assert_eq!(symbols(&dna.translate()), vec!["M", "I"]);

    let frames = dna.open_reading_frames();
    assert_eq!(frames[1].len(), 5);
    assert_eq!(frames[1].as_str(), "TGATT");
}

#[test]
fn trailing_base_is_dropped() {
    let dna = Dna::new("ATGA").unwrap();
    assert_eq!(codon_strings(&dna.codons()), vec!["AUG"]);
}

#[test]
fn empty_sequence() {
    let dna = Dna::new("").unwrap();
    assert!(dna.complement().is_empty());
    assert!(dna.reverse_complement().is_empty());
    assert!(dna.transcribe().is_empty());
    assert!(dna.codons().is_empty());
    assert!(dna.translate().is_empty());

    let frames = dna.open_reading_frames();
    assert_eq!(frames.len(), 6);
    assert!(frames.iter().all(|f| f.is_empty()));
}

#[test]
fn frames_follow_canonical_order() {
    let dna = Dna::new("ATGCGTAC").unwrap();
    let rc = dna.reverse_complement();
    let frames = dna.reading_frames();

    assert_eq!(frames[0].1, dna);
    for (frame, seq) in &frames {
        let source = match frame.strand() {
            Strand::Forward => &dna,
            Strand::Reverse => &rc,
        };
        assert_eq!(seq.as_bytes(), &source.as_bytes()[frame.offset()..]);
    }
    assert_eq!(frames[3].0, ReadingFrame::new(Strand::Reverse, 0).unwrap());
}

#[test]
fn invalid_symbols_rejected_at_construction() {
    assert_eq!(
        Dna::new("ACGX").unwrap_err(),
        NucleoError::InvalidSymbol {
            alphabet: "DNA",
            symbol: 'X',
            position: 3,
        }
    );
    assert!(Dna::new("ACGU").is_err());
    assert!(Rna::new("ACGT").is_err());
    assert!(Dna::new("ACGN").is_err());
}

#[test]
fn unknown_codon_rejected() {
    let code = GeneticCode::standard();
    assert_eq!(
        code.translate_str("ATG"),
        Err(NucleoError::UnknownCodon("ATG".into()))
    );
    assert_eq!(code.translate_str("AUG"), Ok(AminoAcid::Met));
}

#[test]
fn rna_pipeline_matches_dna_pipeline() {
    let dna = Dna::new("ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG").unwrap();
    let rna = dna.transcribe();
    assert_eq!(rna.translate(), dna.translate());
    assert_eq!(
        amino_acids_to_string(&dna.translate()),
        "MAIVMGR*KGAR*"
    );
    assert_eq!(amino_acids_to_string(&dna.translate_to_stop()), "MAIVMGR");
}

#[test]
fn lowercase_normalized_and_hashed_identically() {
    let upper = Dna::new("ACGT").unwrap();
    let lower = Dna::new("acgt").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.content_hash(), lower.content_hash());
    assert_eq!(Sequence::len(&upper), 4);
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrip() {
    let dna = Dna::new("ATGATT").unwrap();
    let json = serde_json::to_string(&dna).unwrap();
    assert_eq!(json, "\"ATGATT\"");
    let back: Dna = serde_json::from_str(&json).unwrap();
    assert_eq!(back, dna);

    assert!(serde_json::from_str::<Dna>("\"ATGX\"").is_err());

    let codon: Codon = serde_json::from_str("\"AUG\"").unwrap();
    assert_eq!(codon, "AUG");
}
