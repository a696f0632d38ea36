/*!
# `IF <comparison> THEN <label>`

## Purpose
Runs the labeled statement when the comparison holds.

## Remarks
The labeled statement runs in place of the `IF`. Execution then carries
on with the statement after the `IF`, not after the label. A `GOSUB`
reached this way returns to the statement after the `IF`.

The target may not be a `FOR` or a `NEXT`; that is an `ADVANCED FEATURE`
error. Both sides of the comparison must be integers or both floats.

## Example
```text
a = 10
IF a < 30 THEN small
PRINT "done"
END
small: PRINT "small "
```
```text
small done
```

*/
