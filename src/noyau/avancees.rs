// src/noyau/avancees.rs
//
// Fonctions étendues livrées avec le moteur :
// - sum(expression, début, fin) : somme de expression pour chaque entier i de début à fin,
//   toute variable libre de l’expression prenant la valeur i
// - log(x) / log(x, base) : logarithme, base 10 par défaut
//
// Les bornes et arguments sont évalués avec les variables de l’appelant.

use num_traits::ToPrimitive;

use super::contexte::Appel;
use super::erreur::{EvalError, Resultat};
use super::extensions::Extensions;
use super::resolution::separer_arguments;
use super::variables::Variables;

pub fn enregistrer(ext: &mut Extensions) {
    ext.register("sum", somme);
    ext.register("log", logarithme);
}

fn somme(args: &str, variables: &Variables, appel: &Appel<'_>) -> Resultat<f64> {
    let parties = separer_arguments(args);
    let [expression, debut, fin] = parties[..] else {
        return Err(EvalError::mal_formee(format!(
            "sum({args}) : 3 arguments attendus (expression, début, fin)"
        )));
    };

    let debut = appel.solve(debut, variables)?;
    let fin = appel.solve(fin, variables)?;
    if !debut.is_finite() || !fin.is_finite() {
        return Err(EvalError::domaine(format!("sum : bornes {debut} .. {fin}")));
    }

    let limite = appel.contexte().iterations_max();
    let termes = if fin < debut {
        0
    } else {
        (fin - debut)
            .floor()
            .to_u64()
            .and_then(|n| n.checked_add(1))
            .ok_or_else(|| EvalError::ressources(limite))?
    };
    if termes > limite {
        return Err(EvalError::ressources(limite));
    }

    log::trace!("sum({expression}) : {termes} termes depuis {debut}");

    let mut total = 0.0;
    for k in 0..termes {
        let i = Variables::Scalaire(debut + k as f64);
        total += appel.solve(expression, &i)?;
    }
    Ok(total)
}

fn logarithme(args: &str, variables: &Variables, appel: &Appel<'_>) -> Resultat<f64> {
    let parties = separer_arguments(args);
    let (x, base) = match parties[..] {
        [x] => (appel.solve(x, variables)?, 10.0),
        [x, base] => (appel.solve(x, variables)?, appel.solve(base, variables)?),
        _ => {
            return Err(EvalError::mal_formee(format!(
                "log({args}) : 1 ou 2 arguments attendus"
            )))
        }
    };

    let v = if base == 10.0 { x.log10() } else { x.log(base) };
    if !v.is_finite() {
        return Err(EvalError::domaine(format!("log({x}, {base})")));
    }
    Ok(v)
}
