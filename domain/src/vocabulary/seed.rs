//! Built-in base vocabulary inserted by the `seed_vocabulary` binary.

use super::parser::ParsedEntry;

/// (original, improved, reason, category, level)
///
/// Originals are single words: the substitution matcher compares whole
/// words, so multi-word expressions would never match.
const BASE_VOCABULARY: [(&str, &str, &str, &str, &str); 24] = [
    ("bon", "excellent", "Plus précis et expressif", "adjectif", "courant"),
    ("mauvais", "déplorable", "Plus formel et descriptif", "adjectif", "courant"),
    ("petit", "minuscule", "Plus précis pour une petite taille", "adjectif", "courant"),
    ("grand", "imposant", "Plus élégant que simplement 'grand'", "adjectif", "courant"),
    ("joli", "ravissant", "Plus recherché que 'joli'", "adjectif", "courant"),
    ("très", "extrêmement", "Plus soutenu et précis", "adverbe", "soutenu"),
    ("beaucoup", "considérablement", "Adverbe plus élégant", "adverbe", "soutenu"),
    ("bien", "admirablement", "Expression plus soignée", "adverbe", "courant"),
    ("mal", "médiocrement", "Registre plus soutenu", "adverbe", "courant"),
    ("vraiment", "effectivement", "Plus formel et précis", "adverbe", "courant"),
    ("et", "ainsi que", "Connecteur plus élégant", "connecteur", "courant"),
    ("mais", "néanmoins", "Conjonction plus sophistiquée", "connecteur", "soutenu"),
    ("donc", "par conséquent", "Plus formel que 'donc'", "connecteur", "courant"),
    ("ensuite", "ultérieurement", "Marque mieux la progression", "connecteur", "courant"),
    ("chose", "élément", "Terme plus précis", "nom", "courant"),
    ("truc", "objet", "Évite le registre familier", "nom", "familier"),
    ("personne", "individu", "Terme plus formel", "nom", "courant"),
    ("temps", "période", "Plus précis que le mot 'temps'", "nom", "courant"),
    ("problème", "difficulté", "Désignation plus précise", "nom", "courant"),
    ("faire", "accomplir", "Verbe plus précis et expressif", "verbe", "courant"),
    ("dire", "exprimer", "Plus élégant que 'dire'", "verbe", "courant"),
    ("aller", "se rendre", "Formulation plus élégante", "verbe", "courant"),
    ("mettre", "installer", "Plus précis que 'mettre'", "verbe", "courant"),
    ("voir", "observer", "Verbe plus soutenu", "verbe", "courant"),
];

pub fn base_vocabulary() -> Vec<ParsedEntry> {
    BASE_VOCABULARY
        .iter()
        .map(|(original, improved, reason, category, level)| ParsedEntry {
            original: original.to_string(),
            improved: improved.to_string(),
            reason: reason.to_string(),
            category: Some(category.to_string()),
            level: level.to_string(),
        })
        .collect()
}
