//! Intertype relation suite

#[cfg(test)]
mod intertype_tests {
    use ap_typing::ap::{all_relations, relation, ApType, Direction};
    use ap_typing::format::TextFormatter;

    fn descriptions(ap_type: &str) -> Vec<(String, String)> {
        let relations = all_relations(ap_type).unwrap();
        relations
            .rows
            .iter()
            .map(|row| (row.name.to_string(), TextFormatter::relation_row(&relations.ap_type, row)))
            .collect()
    }

    #[test]
    fn test_all_relations_of_fvle() {
        let expected = [
            ("Dual", "FVLE <—> ELVF (shared sexta)"),
            ("Identical", "FVLE <—> FVLE (shared sexta)"),
            ("Solution", "FVLE <—> EVLF (shared sexta)"),
            ("Sister", "FVLE <—> FLVE (shared sexta)"),
            ("Radiance", "EFVL <—> FVLE <—> VLEF (square)"),
            ("Instruction", "ELFV —> FVLE —> LEVF (square)"),
            ("Invention", "FLEV —> FVLE —> FEVL (triangular)"),
            ("Assistance", "EVFL —> FVLE —> LVEF (triangular)"),
            ("Enhancement", "EFLV —> FVLE —> VELF (triangular)"),
            ("Regulation", "VLFE —> FVLE —> LFVE (triangular)"),
            ("Near-Identical", "FVLE <—> VFLE (linear)"),
            ("Cousin", "FVLE <—> FVEL (linear)"),
            ("Customary", "FVLE <—> FELV (linear)"),
            ("Specificity", "FVLE <—> LVFE (linear)"),
            ("Faux-Identical", "FVLE <—> VFEL (opposed sexta)"),
            ("Suffocation", "VEFL <—> FVLE <—> LFEV (opposed sexta, square)"),
            ("Conflict", "FVLE <—> LEFV (opposed sexta)"),
        ];
        let actual = descriptions("FVLE");
        assert_eq!(actual.len(), 17);
        for ((name, description), (expected_name, expected_description)) in actual.iter().zip(expected) {
            assert_eq!(name, expected_name);
            assert_eq!(description, expected_description, "{name}");
        }
    }

    #[test]
    fn test_every_other_type_appears_once() {
        for ap_type in ApType::all() {
            let ap = ap_type.to_string();
            let texts: Vec<String> = descriptions(&ap).into_iter().map(|(_, d)| d).collect();
            for other in ApType::all() {
                let other = other.to_string();
                let count: usize = texts.iter().map(|t| t.matches(other.as_str()).count()).sum();
                if other == ap {
                    assert_eq!(count, texts.len() + 1, "{ap} itself");
                } else {
                    assert_eq!(count, 1, "{other} in relations of {ap}");
                }
            }
        }
    }

    #[test]
    fn test_relation_is_consistent_both_ways() {
        for first in ApType::all() {
            for second in ApType::all() {
                let (a, b) = (first.to_string(), second.to_string());
                let forward = relation(&a, &b).unwrap();
                let backward = relation(&b, &a).unwrap();
                assert_eq!(forward.name(), backward.name(), "{a} {b}");
                assert_eq!(forward.category, backward.category);
                match forward.direction {
                    Direction::Mutual => {
                        assert_eq!(backward.direction, Direction::Mutual);
                        assert_eq!(forward.to_string(), format!("{}: {a} <—> {b} ({})", forward.name(), forward.category));
                    }
                    Direction::Forward => assert_eq!(backward.direction, Direction::Backward),
                    Direction::Backward => assert_eq!(backward.direction, Direction::Forward),
                }
                if forward.direction != Direction::Mutual {
                    assert_eq!(forward.to_string(), backward.to_string());
                }
            }
        }
    }

    #[test]
    fn test_relation_examples() {
        let cases = [
            ("FVLE", "ELVF", "Dual: FVLE <—> ELVF (shared sexta)"),
            ("FVLE", "FVLE", "Identical: FVLE <—> FVLE (shared sexta)"),
            ("FVLE", "VLEF", "Radiance: FVLE <—> VLEF (square)"),
            ("FVLE", "EFVL", "Radiance: FVLE <—> EFVL (square)"),
            ("FVLE", "ELFV", "Instruction: ELFV —> FVLE (square)"),
            ("FVLE", "FEVL", "Invention: FVLE —> FEVL (triangular)"),
            ("FVLE", "VEFL", "Suffocation: FVLE <—> VEFL (opposed sexta, square)"),
            ("fvle ", " lefv", "Conflict: FVLE <—> LEFV (opposed sexta)"),
        ];
        for (a, b, expected) in cases {
            assert_eq!(relation(a, b).unwrap().to_string(), expected);
        }
    }

    #[test]
    fn test_dual_remap() {
        let dual = relation("FVLE", "ELVF").unwrap();
        assert_eq!(dual.name(), "Dual");
        assert_eq!(dual.category.label(), "shared sexta");
        assert_eq!(dual.remap.to_string(), "4321");
    }

    #[test]
    fn test_invalid_types() {
        assert!(relation("FVLE", "ELV").is_err());
        assert!(all_relations("FVLX").is_err());
    }
}
