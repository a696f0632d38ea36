/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Marks the end of a `FOR` loop.

## Remarks
`NEXT` goes back to the innermost running `FOR`. Naming a variable
closes the loop for that variable, dropping any loops inside it.

## Example
```text
FOR i = 0 TO 3
FOR j = 0 TO 3
PRINT i * 10 + j
NEXT i
```
```text
0
10
20
```

*/
